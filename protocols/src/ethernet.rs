use netree_common::network::MacAddress;
use pnet::packet::ethernet::{EtherType, EthernetPacket, MutableEthernetPacket};
use tracing::trace;

use crate::error::{self, PacketError};

pub const ETH_HDR_LEN: usize = 14;

/// Well-known values of the Ethernet II type field.
pub mod ether_types {
    pub const IPV4: u16 = 0x0800;
    pub const ARP: u16 = 0x0806;
    pub const IPV6: u16 = 0x86dd;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthernetHeader {
    pub destination: MacAddress,
    pub source: MacAddress,
    pub ethertype: u16,
}

impl EthernetHeader {
    pub fn new(destination: MacAddress, source: MacAddress, ethertype: u16) -> Self {
        Self {
            destination,
            source,
            ethertype,
        }
    }

    pub fn to_bytes(&self) -> Result<[u8; ETH_HDR_LEN], PacketError> {
        make_header(self.destination, self.source, self.ethertype)
    }
}

/// Writes `destination || source || ethertype` at the start of `buffer`.
pub fn write_header(
    buffer: &mut [u8],
    destination: MacAddress,
    source: MacAddress,
    ethertype: u16,
) -> Result<(), PacketError> {
    let len = buffer.len();
    let mut eth = MutableEthernetPacket::new(buffer)
        .ok_or_else(|| error::truncated("Ethernet header", ETH_HDR_LEN, len))?;

    eth.set_destination(destination.into());
    eth.set_source(source.into());
    eth.set_ethertype(EtherType::new(ethertype));

    Ok(())
}

pub fn make_header(
    destination: MacAddress,
    source: MacAddress,
    ethertype: u16,
) -> Result<[u8; ETH_HDR_LEN], PacketError> {
    let mut buffer = [0u8; ETH_HDR_LEN];
    write_header(&mut buffer, destination, source, ethertype)?;
    Ok(buffer)
}

/// Parses a bare 14-byte header.
pub fn parse(bytes: &[u8]) -> Result<EthernetHeader, PacketError> {
    error::expect_len("Ethernet header", ETH_HDR_LEN, bytes)?;
    let eth = EthernetPacket::new(bytes)
        .ok_or_else(|| error::truncated("Ethernet header", ETH_HDR_LEN, bytes.len()))?;

    let header = EthernetHeader {
        destination: eth.get_destination().into(),
        source: eth.get_source().into(),
        ethertype: eth.get_ethertype().0,
    };
    trace!(
        "parsed Ethernet header {} -> {} (0x{:04x})",
        header.source, header.destination, header.ethertype
    );
    Ok(header)
}

/// Splits a received frame into its header and everything after it.
pub fn split_frame(frame: &[u8]) -> Result<(EthernetHeader, &[u8]), PacketError> {
    error::expect_min_len("Ethernet frame", ETH_HDR_LEN, frame)?;
    let (header, payload) = frame.split_at(ETH_HDR_LEN);
    Ok((parse(header)?, payload))
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
