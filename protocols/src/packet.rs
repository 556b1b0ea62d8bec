use std::fmt;
use std::str::FromStr;

use crate::arp::{self, ArpMessage};
use crate::error::PacketError;
use crate::ethernet::{self, EthernetHeader};
use crate::icmp::{self, IcmpEchoMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolKind {
    Ethernet,
    Arp,
    IcmpEcho,
}

impl FromStr for ProtocolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ethernet" | "eth" => Ok(ProtocolKind::Ethernet),
            "arp" => Ok(ProtocolKind::Arp),
            "icmp" | "echo" => Ok(ProtocolKind::IcmpEcho),
            _ => Err(format!("unknown protocol: {s}")),
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtocolKind::Ethernet => "ethernet",
            ProtocolKind::Arp => "arp",
            ProtocolKind::IcmpEcho => "icmp",
        };
        f.write_str(name)
    }
}

/// A message with a byte-exact wire representation.
pub trait WireFormat: Sized {
    const KIND: ProtocolKind;

    fn to_bytes(&self) -> Result<Vec<u8>, PacketError>;

    fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError>;
}

impl WireFormat for EthernetHeader {
    const KIND: ProtocolKind = ProtocolKind::Ethernet;

    fn to_bytes(&self) -> Result<Vec<u8>, PacketError> {
        EthernetHeader::to_bytes(self).map(|bytes| bytes.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        ethernet::parse(bytes)
    }
}

/// The bare 28-byte payload; full frames go through [`arp::build`].
impl WireFormat for ArpMessage {
    const KIND: ProtocolKind = ProtocolKind::Arp;

    fn to_bytes(&self) -> Result<Vec<u8>, PacketError> {
        ArpMessage::to_bytes(self).map(|bytes| bytes.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        arp::parse(bytes)
    }
}

impl WireFormat for IcmpEchoMessage {
    const KIND: ProtocolKind = ProtocolKind::IcmpEcho;

    fn to_bytes(&self) -> Result<Vec<u8>, PacketError> {
        icmp::build_message(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        icmp::parse(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Ethernet(EthernetHeader),
    Arp(ArpMessage),
    IcmpEcho(IcmpEchoMessage),
}

impl Packet {
    pub fn parse(kind: ProtocolKind, bytes: &[u8]) -> Result<Self, PacketError> {
        let packet = match kind {
            ProtocolKind::Ethernet => Packet::Ethernet(EthernetHeader::from_bytes(bytes)?),
            ProtocolKind::Arp => Packet::Arp(ArpMessage::from_bytes(bytes)?),
            ProtocolKind::IcmpEcho => Packet::IcmpEcho(IcmpEchoMessage::from_bytes(bytes)?),
        };
        Ok(packet)
    }

    pub fn kind(&self) -> ProtocolKind {
        match self {
            Packet::Ethernet(_) => EthernetHeader::KIND,
            Packet::Arp(_) => ArpMessage::KIND,
            Packet::IcmpEcho(_) => IcmpEchoMessage::KIND,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PacketError> {
        match self {
            Packet::Ethernet(header) => WireFormat::to_bytes(header),
            Packet::Arp(message) => WireFormat::to_bytes(message),
            Packet::IcmpEcho(message) => WireFormat::to_bytes(message),
        }
    }
}

impl From<EthernetHeader> for Packet {
    fn from(header: EthernetHeader) -> Self {
        Packet::Ethernet(header)
    }
}

impl From<ArpMessage> for Packet {
    fn from(message: ArpMessage) -> Self {
        Packet::Arp(message)
    }
}

impl From<IcmpEchoMessage> for Packet {
    fn from(message: IcmpEchoMessage) -> Self {
        Packet::IcmpEcho(message)
    }
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
