/// Default payload length of ICMP echo requests, timestamp included.
pub const DEFAULT_ECHO_PAYLOAD_LEN: usize = 192;

#[derive(Debug, Clone)]
pub struct Config {
    /// Total number of payload bytes appended to an ICMP echo request.
    ///
    /// The first 8 bytes carry a send timestamp, the rest is filler.
    pub echo_payload_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo_payload_len: DEFAULT_ECHO_PAYLOAD_LEN,
        }
    }
}
