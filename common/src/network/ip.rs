use std::net::Ipv4Addr;

use crate::error::AddressError;

pub const IPV4_ADDR_LEN: usize = 4;

/// Converts dotted-decimal text into 4 big-endian bytes.
pub fn ip_to_bytes(text: &str) -> Result<[u8; IPV4_ADDR_LEN], AddressError> {
    text.parse::<Ipv4Addr>()
        .map(|addr| addr.octets())
        .map_err(|_| AddressError::format(text))
}

/// Renders exactly 4 bytes as dotted-decimal text.
pub fn ip_from_bytes(bytes: &[u8]) -> Result<String, AddressError> {
    ipv4_from_slice(bytes).map(|addr| addr.to_string())
}

pub fn ipv4_from_slice(bytes: &[u8]) -> Result<Ipv4Addr, AddressError> {
    let octets: [u8; IPV4_ADDR_LEN] =
        bytes.try_into().map_err(|_| AddressError::InvalidLength {
            expected: IPV4_ADDR_LEN,
            actual: bytes.len(),
        })?;
    Ok(Ipv4Addr::from(octets))
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
