//!# Speed configuration
//! The legacy API selects bus speed and oscillator frequency with a single [SpeedConfig] value.
//! Only the combinations supported by the MCP2515 family are valid.
//!
//! ```
//!# use mcp2515_legacy::config::{CanClock, CanSpeed, SpeedConfig};
//! let config = SpeedConfig::try_from(6).unwrap();
//! assert_eq!((CanSpeed::Kbps1000, CanClock::MHz16), config.bitrate());
//!
//! // 1 Mbps is not reachable with an 8 MHz crystal
//! assert_eq!(None, SpeedConfig::from_parts(CanSpeed::Kbps1000, CanClock::MHz8));
//! ```

/// CAN bus bit rate
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CanSpeed {
    Kbps125,
    Kbps250,
    Kbps500,
    Kbps1000,
}

/// Oscillator frequency of the controller
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CanClock {
    MHz8,
    MHz16,
}

/// Combined speed and clock selector
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum SpeedConfig {
    Kbps125MHz8 = 0,
    Kbps250MHz8 = 1,
    Kbps500MHz8 = 2,
    Kbps125MHz16 = 3,
    Kbps250MHz16 = 4,
    Kbps500MHz16 = 5,
    Kbps1000MHz16 = 6,
}

/// Selector value does not name a supported speed/clock combination
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidSelector(pub u8);

impl SpeedConfig {
    /// All supported selectors in legacy order
    pub const ALL: [SpeedConfig; 7] = [
        Self::Kbps125MHz8,
        Self::Kbps250MHz8,
        Self::Kbps500MHz8,
        Self::Kbps125MHz16,
        Self::Kbps250MHz16,
        Self::Kbps500MHz16,
        Self::Kbps1000MHz16,
    ];

    /// Builds the selector from its parts, returns None for unsupported combinations
    pub fn from_parts(speed: CanSpeed, clock: CanClock) -> Option<Self> {
        Self::ALL.into_iter().find(|config| config.bitrate() == (speed, clock))
    }

    /// Speed and clock handed to the driver
    pub fn bitrate(&self) -> (CanSpeed, CanClock) {
        match self {
            Self::Kbps125MHz8 => (CanSpeed::Kbps125, CanClock::MHz8),
            Self::Kbps250MHz8 => (CanSpeed::Kbps250, CanClock::MHz8),
            Self::Kbps500MHz8 => (CanSpeed::Kbps500, CanClock::MHz8),
            Self::Kbps125MHz16 => (CanSpeed::Kbps125, CanClock::MHz16),
            Self::Kbps250MHz16 => (CanSpeed::Kbps250, CanClock::MHz16),
            Self::Kbps500MHz16 => (CanSpeed::Kbps500, CanClock::MHz16),
            Self::Kbps1000MHz16 => (CanSpeed::Kbps1000, CanClock::MHz16),
        }
    }
}

impl TryFrom<u8> for SpeedConfig {
    type Error = InvalidSelector;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(InvalidSelector(value))
    }
}

impl From<SpeedConfig> for u8 {
    fn from(config: SpeedConfig) -> Self {
        config as u8
    }
}
