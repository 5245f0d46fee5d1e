//!# Acceptance masks and filters
//! The MCP2515 has two acceptance masks and six acceptance filters. Mask 0 applies to filters 0-1
//! (receive buffer 0), mask 1 to filters 2-5 (receive buffer 1).
//!
//! ```
//!# use mcp2515_legacy::filter::{Mask, RxFilter};
//! assert_eq!(Some(Mask::Mask1), Mask::new(1));
//! assert_eq!(None, Mask::new(2));
//!
//! assert_eq!(Some(RxFilter::Rxf5), RxFilter::new(5));
//! assert_eq!(None, RxFilter::new(6));
//! ```

/// Acceptance mask index
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mask {
    Mask0,
    Mask1,
}

impl Mask {
    /// Returns the mask for the given legacy index, None if out of range
    pub fn new(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Mask0),
            1 => Some(Self::Mask1),
            _ => None,
        }
    }
}

/// Acceptance filter index
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RxFilter {
    Rxf0,
    Rxf1,
    Rxf2,
    Rxf3,
    Rxf4,
    Rxf5,
}

impl RxFilter {
    /// Returns the filter for the given legacy index, None if out of range
    pub fn new(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Rxf0),
            1 => Some(Self::Rxf1),
            2 => Some(Self::Rxf2),
            3 => Some(Self::Rxf3),
            4 => Some(Self::Rxf4),
            5 => Some(Self::Rxf5),
            _ => None,
        }
    }

    /// Mask applied to this filter
    pub fn mask(&self) -> Mask {
        match self {
            Self::Rxf0 | Self::Rxf1 => Mask::Mask0,
            _ => Mask::Mask1,
        }
    }
}
