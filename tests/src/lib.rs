//! Cross-crate checks of the packet codec.

#[cfg(test)]
mod codec;
