//! ICMP echo request/reply messages.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |     Type      |     Code      |          Checksum             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           Identifier          |        Sequence Number        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |     Data ...
//! +-+-+-+-+-
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use pnet::packet::Packet;
use pnet::packet::icmp::echo_request::{EchoRequestPacket, MutableEchoRequestPacket};
use pnet::packet::icmp::{IcmpCode, IcmpType};
use tracing::{debug, trace};

use crate::checksum;
use crate::error::{self, PacketError};

pub const ICMP_HDR_LEN: usize = 8;
pub const TIMESTAMP_LEN: usize = 8;
pub const ECHO_FILL_BYTE: u8 = b'Q';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EchoKind {
    Request,
    Reply,
}

impl EchoKind {
    pub fn icmp_type(self) -> u8 {
        match self {
            EchoKind::Request => 8,
            EchoKind::Reply => 0,
        }
    }

    pub fn from_icmp_type(icmp_type: u8) -> Option<Self> {
        match icmp_type {
            8 => Some(EchoKind::Request),
            0 => Some(EchoKind::Reply),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IcmpEchoMessage {
    pub kind: EchoKind,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence: i16,
    pub payload: Vec<u8>,
}

impl IcmpEchoMessage {
    pub fn request(identifier: u16, sequence: i16, payload: Vec<u8>) -> Result<Self, PacketError> {
        Self::with_checksum(EchoKind::Request, identifier, sequence, payload)
    }

    pub fn reply(identifier: u16, sequence: i16, payload: Vec<u8>) -> Result<Self, PacketError> {
        Self::with_checksum(EchoKind::Reply, identifier, sequence, payload)
    }

    fn with_checksum(
        kind: EchoKind,
        identifier: u16,
        sequence: i16,
        payload: Vec<u8>,
    ) -> Result<Self, PacketError> {
        let mut message = Self {
            kind,
            code: 0,
            checksum: 0,
            identifier,
            sequence,
            payload,
        };
        message.checksum = message.compute_checksum()?;
        Ok(message)
    }

    /// Checksum over the message with a zeroed checksum field.
    pub fn compute_checksum(&self) -> Result<u16, PacketError> {
        Ok(checksum::checksum(&self.encode(0)?))
    }

    /// Whether the stored checksum matches the rest of the message.
    pub fn has_valid_checksum(&self) -> bool {
        self.encode(self.checksum)
            .is_ok_and(|packet| checksum::verify(&packet))
    }

    pub fn is_reply_to(&self, identifier: u16, sequence: i16) -> bool {
        self.kind == EchoKind::Reply && self.identifier == identifier && self.sequence == sequence
    }

    /// Send time written by [`default_payload`], as seconds since the UNIX epoch.
    pub fn payload_timestamp(&self) -> Option<f64> {
        let raw: [u8; TIMESTAMP_LEN] = self.payload.get(..TIMESTAMP_LEN)?.try_into().ok()?;
        Some(f64::from_be_bytes(raw))
    }

    /// Header and payload with `checksum` written as is.
    ///
    /// Requests and replies share the echo layout, only the type differs.
    fn encode(&self, checksum: u16) -> Result<Vec<u8>, PacketError> {
        let mut packet = vec![0u8; ICMP_HDR_LEN + self.payload.len()];
        let len = packet.len();
        let mut echo = MutableEchoRequestPacket::new(&mut packet)
            .ok_or_else(|| error::truncated("ICMP echo", ICMP_HDR_LEN, len))?;

        echo.set_icmp_type(IcmpType::new(self.kind.icmp_type()));
        echo.set_icmp_code(IcmpCode::new(self.code));
        echo.set_checksum(checksum);
        echo.set_identifier(self.identifier);
        echo.set_sequence_number(self.sequence as u16);
        echo.set_payload(&self.payload);
        Ok(packet)
    }
}

/// Builds an echo request whose checksum covers header and payload.
///
/// `identifier` and `sequence` are owned by the caller; nothing is generated here.
pub fn build<F>(identifier: u16, sequence: i16, payload_factory: F) -> Result<Vec<u8>, PacketError>
where
    F: FnOnce() -> Vec<u8>,
{
    let message = IcmpEchoMessage {
        kind: EchoKind::Request,
        code: 0,
        checksum: 0,
        identifier,
        sequence,
        payload: payload_factory(),
    };
    build_message(&message)
}

/// Serialises `message`, replacing its checksum field with a fresh one.
pub fn build_message(message: &IcmpEchoMessage) -> Result<Vec<u8>, PacketError> {
    let mut packet = message.encode(0)?;
    let csum = checksum::checksum(&packet);

    let len = packet.len();
    let mut echo = MutableEchoRequestPacket::new(&mut packet)
        .ok_or_else(|| error::truncated("ICMP echo", ICMP_HDR_LEN, len))?;
    echo.set_checksum(csum);

    trace!(
        "built ICMP echo id={} seq={} ({} payload bytes, checksum 0x{csum:04x})",
        message.identifier,
        message.sequence,
        message.payload.len()
    );
    Ok(packet)
}

/// Current time followed by filler, `payload_len` bytes in total.
pub fn default_payload(payload_len: usize) -> Vec<u8> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();
    timestamped_payload(now, payload_len)
}

/// Big-endian `f64` timestamp padded with [`ECHO_FILL_BYTE`].
///
/// Lengths below [`TIMESTAMP_LEN`] truncate the timestamp.
pub fn timestamped_payload(timestamp: f64, payload_len: usize) -> Vec<u8> {
    let mut payload = vec![ECHO_FILL_BYTE; payload_len];
    let stamp = timestamp.to_be_bytes();
    let n = payload_len.min(TIMESTAMP_LEN);
    payload[..n].copy_from_slice(&stamp[..n]);
    payload
}

/// Parses an echo request or reply. The received checksum is kept as is,
/// see [`IcmpEchoMessage::has_valid_checksum`].
pub fn parse(bytes: &[u8]) -> Result<IcmpEchoMessage, PacketError> {
    error::expect_min_len("ICMP echo", ICMP_HDR_LEN, bytes)?;
    let echo = EchoRequestPacket::new(bytes)
        .ok_or_else(|| error::truncated("ICMP echo", ICMP_HDR_LEN, bytes.len()))?;

    let icmp_type = echo.get_icmp_type().0;
    let kind = EchoKind::from_icmp_type(icmp_type).ok_or_else(|| {
        debug!("ignoring ICMP message of type {icmp_type}");
        PacketError::UnsupportedIcmpType(icmp_type)
    })?;

    Ok(IcmpEchoMessage {
        kind,
        code: echo.get_icmp_code().0,
        checksum: echo.get_checksum(),
        identifier: echo.get_identifier(),
        sequence: echo.get_sequence_number() as i16,
        payload: echo.payload().to_vec(),
    })
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
