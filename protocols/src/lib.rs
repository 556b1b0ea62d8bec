//! # netree protocols
//!
//! Byte-exact builders and parsers for the frames a LAN scanner puts on the
//! wire and reads back:
//!
//! * **[`ethernet`]**: the 14-byte Ethernet II header.
//! * **[`arp`]**: ARP requests/replies, full 42-byte frames and request batches.
//! * **[`icmp`]**: ICMP echo request/reply messages.
//! * **[`checksum`]**: the RFC 1071 Internet checksum.
//! * **[`packet`]**: the closed set of supported protocols behind one interface.
//!
//! Every function is pure: callers own transport, timing and retries.

pub mod arp;
pub mod checksum;
pub mod error;
pub mod ethernet;
pub mod icmp;
pub mod packet;

pub use error::PacketError;
pub use packet::{Packet, ProtocolKind, WireFormat};
