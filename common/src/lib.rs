//! # netree common
//!
//! Shared building blocks for the packet codec and its tools:
//!
//! * **[`network`]**: address types and their text/binary conversions.
//! * **[`config`]**: codec-wide tunables.
//! * **[`error`]**: address conversion failures.

pub mod config;
pub mod error;
pub mod network;
