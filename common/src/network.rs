//! Address codecs for the link and network layer.

pub mod ip;
pub mod mac;

pub use ip::{ip_from_bytes, ip_to_bytes, ipv4_from_slice};
pub use mac::{MacAddress, mac_to_bytes, mac_to_text};
