use netree_common::error::AddressError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketError {
    /// The buffer is not exactly the fixed size of the protocol.
    #[error("bad {protocol} length: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        protocol: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The buffer is shorter than the smallest valid message.
    #[error("truncated {protocol}: need at least {minimum} bytes, got {actual}")]
    Truncated {
        protocol: &'static str,
        minimum: usize,
        actual: usize,
    },
    #[error("unexpected ethertype: expected 0x{expected:04x}, got 0x{actual:04x}")]
    UnexpectedEtherType { expected: u16, actual: u16 },
    #[error("unsupported ICMP type {0}: only echo request (8) and reply (0) are handled")]
    UnsupportedIcmpType(u8),
    #[error(transparent)]
    Address(#[from] AddressError),
}

pub(crate) fn expect_len(
    protocol: &'static str,
    expected: usize,
    bytes: &[u8],
) -> Result<(), PacketError> {
    if bytes.len() != expected {
        return Err(PacketError::LengthMismatch {
            protocol,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Error for a packet view that could not be laid over a buffer of `actual` bytes.
pub(crate) fn truncated(protocol: &'static str, minimum: usize, actual: usize) -> PacketError {
    PacketError::Truncated {
        protocol,
        minimum,
        actual,
    }
}

pub(crate) fn expect_min_len(
    protocol: &'static str,
    minimum: usize,
    bytes: &[u8],
) -> Result<(), PacketError> {
    if bytes.len() < minimum {
        return Err(truncated(protocol, minimum, bytes.len()));
    }
    Ok(())
}
