use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;
use tracing::debug;

use crate::error::AddressError;

pub const MAC_ADDR_LEN: usize = 6;

/// Length of the canonical `aa:bb:cc:dd:ee:ff` text form.
pub const MAC_TEXT_LEN: usize = 17;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// A 48-bit IEEE 802 hardware address.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; MAC_ADDR_LEN]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xff; MAC_ADDR_LEN]);
    pub const ZERO: MacAddress = MacAddress([0x00; MAC_ADDR_LEN]);

    pub const fn new(octets: [u8; MAC_ADDR_LEN]) -> Self {
        MacAddress(octets)
    }

    pub const fn octets(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Group bit (least significant bit of the first octet) is set.
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Identify the vendor of this address through its **OUI** prefix.
    ///
    /// Returns `None` when the prefix is unknown or the bundled database
    /// could not be loaded.
    pub fn vendor(&self) -> Option<String> {
        let db = get_oui_db().as_ref()?;
        match db.lookup_by_mac(&self.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            Ok(None) => None,
            Err(e) => {
                debug!("OUI lookup for {self} failed: {e}");
                None
            }
        }
    }
}

/// Retrieves or initializes the **Organizationally unique identifier** database.
fn get_oui_db() -> &'static Option<Oui> {
    OUI_DB.get_or_init(|| match Oui::default() {
        Ok(db) => Some(db),
        Err(e) => {
            debug!("failed to load OUI database: {e:?}");
            None
        }
    })
}

impl FromStr for MacAddress {
    type Err = AddressError;

    /// Parses `aa:bb:cc:dd:ee:ff`. Hex digits may be of either case,
    /// every other shape is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != MAC_TEXT_LEN {
            return Err(AddressError::format(s));
        }

        let mut octets = [0u8; MAC_ADDR_LEN];
        for (i, octet) in octets.iter_mut().enumerate() {
            let pos = i * 3;
            if i > 0 && raw[pos - 1] != b':' {
                return Err(AddressError::format(s));
            }
            let hi = hex_value(raw[pos]).ok_or_else(|| AddressError::format(s))?;
            let lo = hex_value(raw[pos + 1]).ok_or_else(|| AddressError::format(s))?;
            *octet = (hi << 4) | lo;
        }

        Ok(MacAddress(octets))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let octets: [u8; MAC_ADDR_LEN] =
            bytes.try_into().map_err(|_| AddressError::InvalidLength {
                expected: MAC_ADDR_LEN,
                actual: bytes.len(),
            })?;
        Ok(MacAddress(octets))
    }
}

impl From<[u8; MAC_ADDR_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_ADDR_LEN]) -> Self {
        MacAddress(octets)
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        let MacAddr(a, b, c, d, e, f) = mac;
        MacAddress([a, b, c, d, e, f])
    }
}

impl From<MacAddress> for MacAddr {
    fn from(mac: MacAddress) -> Self {
        let [a, b, c, d, e, f] = mac.0;
        MacAddr::new(a, b, c, d, e, f)
    }
}

/// Converts `aa:bb:cc:dd:ee:ff` text into its 6 raw bytes.
pub fn mac_to_bytes(text: &str) -> Result<[u8; MAC_ADDR_LEN], AddressError> {
    text.parse::<MacAddress>().map(|mac| mac.octets())
}

/// Renders exactly 6 raw bytes as lowercase colon-separated hex.
pub fn mac_to_text(bytes: &[u8]) -> Result<String, AddressError> {
    MacAddress::try_from(bytes).map(|mac| mac.to_string())
}



// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
