use anyhow::Context;
use netree_common::config::Config;
use netree_protocols::icmp;
use tracing::{debug, info};

pub fn echo(
    identifier: Option<u16>,
    sequence: i16,
    payload_len: Option<usize>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let identifier = identifier.unwrap_or((std::process::id() & 0xffff) as u16);
    let payload_len = payload_len.unwrap_or(cfg.echo_payload_len);
    debug!("Echo request id={identifier} seq={sequence} payload={payload_len}B");

    let packet = icmp::build(identifier, sequence, || icmp::default_payload(payload_len))
        .context("failed to build ICMP echo request")?;
    info!("{}", hex::encode(&packet));
    Ok(())
}
