use std::net::Ipv4Addr;

use netree_common::network::MacAddress;
use pnet::packet::arp::{self as wire, ArpHardwareType, ArpPacket, MutableArpPacket};
use pnet::packet::ethernet::EtherType;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{self, PacketError};
use crate::ethernet::{self, ETH_HDR_LEN, EthernetHeader, ether_types};

pub const ARP_LEN: usize = 28;
pub const ARP_FRAME_LEN: usize = ETH_HDR_LEN + ARP_LEN;

pub const HW_TYPE_ETHERNET: u16 = 1;
pub const HW_ADDR_LEN: u8 = 6;
pub const PROTO_ADDR_LEN: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ArpOperation {
    Request = 1,
    Reply = 2,
}

impl ArpOperation {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(ArpOperation::Request),
            2 => Some(ArpOperation::Reply),
            _ => None,
        }
    }
}

/// An IPv4-over-Ethernet ARP payload.
///
/// Fields are kept raw so that a parsed message reproduces the wire exactly,
/// even for opcodes or address sizes this crate never emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArpMessage {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_len: u8,
    pub protocol_len: u8,
    pub opcode: u16,
    pub sender_mac: MacAddress,
    pub sender_ip: Ipv4Addr,
    pub target_mac: MacAddress,
    pub target_ip: Ipv4Addr,
}

impl ArpMessage {
    pub fn new(
        operation: ArpOperation,
        sender_mac: MacAddress,
        sender_ip: Ipv4Addr,
        target_mac: MacAddress,
        target_ip: Ipv4Addr,
    ) -> Self {
        Self {
            hardware_type: HW_TYPE_ETHERNET,
            protocol_type: ether_types::IPV4,
            hardware_len: HW_ADDR_LEN,
            protocol_len: PROTO_ADDR_LEN,
            opcode: operation.code(),
            sender_mac,
            sender_ip,
            target_mac,
            target_ip,
        }
    }

    /// "Who has `target_ip`?" with an all-zero target hardware address.
    pub fn request(sender_mac: MacAddress, sender_ip: Ipv4Addr, target_ip: Ipv4Addr) -> Self {
        Self::new(
            ArpOperation::Request,
            sender_mac,
            sender_ip,
            MacAddress::ZERO,
            target_ip,
        )
    }

    pub fn reply(
        sender_mac: MacAddress,
        sender_ip: Ipv4Addr,
        target_mac: MacAddress,
        target_ip: Ipv4Addr,
    ) -> Self {
        Self::new(
            ArpOperation::Reply,
            sender_mac,
            sender_ip,
            target_mac,
            target_ip,
        )
    }

    pub fn operation(&self) -> Option<ArpOperation> {
        ArpOperation::from_code(self.opcode)
    }

    /// Writes the 28 payload bytes at the start of `buffer`.
    pub fn write_to(&self, buffer: &mut [u8]) -> Result<(), PacketError> {
        let len = buffer.len();
        let mut arp_packet = MutableArpPacket::new(buffer)
            .ok_or_else(|| error::truncated("ARP packet", ARP_LEN, len))?;

        arp_packet.set_hardware_type(ArpHardwareType::new(self.hardware_type));
        arp_packet.set_protocol_type(EtherType::new(self.protocol_type));
        arp_packet.set_hw_addr_len(self.hardware_len);
        arp_packet.set_proto_addr_len(self.protocol_len);
        arp_packet.set_operation(wire::ArpOperation::new(self.opcode));
        arp_packet.set_sender_hw_addr(self.sender_mac.into());
        arp_packet.set_sender_proto_addr(self.sender_ip);
        arp_packet.set_target_hw_addr(self.target_mac.into());
        arp_packet.set_target_proto_addr(self.target_ip);
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<[u8; ARP_LEN], PacketError> {
        let mut buffer = [0u8; ARP_LEN];
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Identity of the host sending a batch of ARP requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArpSender {
    /// Source address of the Ethernet header.
    pub source_mac: MacAddress,
    pub sender_mac: MacAddress,
    pub sender_ip: Ipv4Addr,
    pub target_mac: MacAddress,
}

impl ArpSender {
    /// Uses `mac` for both the Ethernet source and the ARP sender field.
    pub fn new(mac: MacAddress, ip: Ipv4Addr) -> Self {
        Self {
            source_mac: mac,
            sender_mac: mac,
            sender_ip: ip,
            target_mac: MacAddress::ZERO,
        }
    }

    pub fn request_for(&self, target_ip: Ipv4Addr) -> ArpMessage {
        ArpMessage::new(
            ArpOperation::Request,
            self.sender_mac,
            self.sender_ip,
            self.target_mac,
            target_ip,
        )
    }
}

/// Builds a complete 42-byte ARP frame.
pub fn build(
    message: &ArpMessage,
    destination_mac: MacAddress,
    source_mac: MacAddress,
) -> Result<[u8; ARP_FRAME_LEN], PacketError> {
    let mut frame = [0u8; ARP_FRAME_LEN];
    ethernet::write_header(&mut frame, destination_mac, source_mac, ether_types::ARP)?;
    message.write_to(&mut frame[ETH_HDR_LEN..])?;
    Ok(frame)
}

/// Builds one broadcast request per target, in the order of `targets`.
pub fn build_batch(
    targets: &[Ipv4Addr],
    sender: &ArpSender,
) -> Result<Vec<[u8; ARP_FRAME_LEN]>, PacketError> {
    debug!(
        "Creating {} ARP requests from {} ({})",
        targets.len(),
        sender.sender_ip,
        sender.sender_mac
    );
    targets
        .par_iter()
        .map(|&target_ip| {
            build(
                &sender.request_for(target_ip),
                MacAddress::BROADCAST,
                sender.source_mac,
            )
        })
        .collect()
}

/// Parses a bare 28-byte ARP payload (Ethernet header already stripped).
pub fn parse(bytes: &[u8]) -> Result<ArpMessage, PacketError> {
    error::expect_len("ARP packet", ARP_LEN, bytes)?;
    let arp_packet = ArpPacket::new(bytes)
        .ok_or_else(|| error::truncated("ARP packet", ARP_LEN, bytes.len()))?;

    let message = ArpMessage {
        hardware_type: arp_packet.get_hardware_type().0,
        protocol_type: arp_packet.get_protocol_type().0,
        hardware_len: arp_packet.get_hw_addr_len(),
        protocol_len: arp_packet.get_proto_addr_len(),
        opcode: arp_packet.get_operation().0,
        sender_mac: arp_packet.get_sender_hw_addr().into(),
        sender_ip: arp_packet.get_sender_proto_addr(),
        target_mac: arp_packet.get_target_hw_addr().into(),
        target_ip: arp_packet.get_target_proto_addr(),
    };
    trace!(
        "parsed ARP opcode {} {} ({}) -> {}",
        message.opcode, message.sender_ip, message.sender_mac, message.target_ip
    );
    Ok(message)
}

/// Parses a received ARP frame, tolerating trailing link-layer padding.
pub fn parse_frame(frame: &[u8]) -> Result<(EthernetHeader, ArpMessage), PacketError> {
    let (header, payload) = ethernet::split_frame(frame)?;
    if header.ethertype != ether_types::ARP {
        return Err(PacketError::UnexpectedEtherType {
            expected: ether_types::ARP,
            actual: header.ethertype,
        });
    }
    error::expect_min_len("ARP packet", ARP_LEN, payload)?;
    Ok((header, parse(&payload[..ARP_LEN])?))
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
