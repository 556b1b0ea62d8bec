//! RFC 1071 Internet checksum.

/// Computes the Internet checksum of `data`.
///
/// Words are read big-endian and an odd trailing byte is padded with a zero
/// byte, so the returned value is written to the wire with `to_be_bytes`.
/// A buffer that already carries its own checksum sums to `0`.
pub fn checksum(data: &[u8]) -> u16 {
    !fold(sum_words(data))
}

/// Receiver-side check: `true` when `data`, checksum field included, sums to zero.
pub fn verify(data: &[u8]) -> bool {
    checksum(data) == 0
}

fn sum_words(data: &[u8]) -> u64 {
    let mut words = data.chunks_exact(2);
    let mut sum: u64 = words
        .by_ref()
        .map(|word| u16::from_be_bytes([word[0], word[1]]) as u64)
        .sum();

    if let [last] = words.remainder() {
        sum += u16::from_be_bytes([*last, 0]) as u64;
    }
    sum
}

fn fold(mut sum: u64) -> u16 {
    while sum >> 16 != 0 {
        sum = (sum & 0xffff) + (sum >> 16);
    }
    sum as u16
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
