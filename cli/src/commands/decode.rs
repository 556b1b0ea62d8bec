use anyhow::Context;
use netree_protocols::arp::{self, ARP_LEN};
use netree_protocols::{Packet, ProtocolKind};
use tracing::{info, warn};

pub fn decode(protocol: ProtocolKind, input: &str) -> anyhow::Result<()> {
    let bytes = parse_hex(input)?;

    // Full frames are accepted for ARP as well as the bare payload.
    let packet = if protocol == ProtocolKind::Arp && bytes.len() != ARP_LEN {
        let (header, message) = arp::parse_frame(&bytes)
            .with_context(|| format!("failed to decode {} bytes as an ARP frame", bytes.len()))?;
        info!("{header:#?}");
        Packet::Arp(message)
    } else {
        Packet::parse(protocol, &bytes)
            .with_context(|| format!("failed to decode {} bytes as {protocol}", bytes.len()))?
    };

    if let Packet::IcmpEcho(message) = &packet {
        if !message.has_valid_checksum() {
            warn!(
                "Checksum mismatch: got 0x{:04x}, expected 0x{:04x}",
                message.checksum,
                message.compute_checksum()?
            );
        }
    }
    info!("{packet:#?}");
    Ok(())
}

fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = input.trim();
    let clean: String = trimmed
        .strip_prefix("0x")
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&clean).context("input is not valid hex")
}




// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
