use std::collections::HashSet;
use std::net::Ipv4Addr;

use anyhow::Context;
use netree_common::network::MacAddress;
use netree_protocols::arp::{self, ArpSender};
use tracing::{info, warn};

pub fn arp(
    source_mac: MacAddress,
    sender_mac: Option<MacAddress>,
    sender_ip: Ipv4Addr,
    mut targets: Vec<Ipv4Addr>,
) -> anyhow::Result<()> {
    let mut seen: HashSet<Ipv4Addr> = HashSet::new();
    targets.retain(|ip| {
        let first = seen.insert(*ip);
        if !first {
            warn!("Skipping duplicate target {ip}");
        }
        first
    });

    let mut sender = ArpSender::new(source_mac, sender_ip);
    if let Some(mac) = sender_mac {
        sender.sender_mac = mac;
    }

    let frames = arp::build_batch(&targets, &sender).context("failed to build ARP requests")?;
    for (target, frame) in targets.iter().zip(&frames) {
        info!("{target:<15} {}", hex::encode(frame));
    }
    Ok(())
}
