//!# Legacy status codes
//! Every legacy entry point of [Controller](crate::can::Controller) reports one of the [Status] codes below.
//! The numeric values are part of the compatibility surface and match the historic `CAN_*` defines.
//!
//! ```
//!# use mcp2515_legacy::status::{Status, CAN_MSGAVAIL};
//! assert_eq!(CAN_MSGAVAIL, u8::from(Status::MsgAvailable));
//! assert_eq!(Some(Status::NoMsg), Status::from_code(4));
//! ```

use crate::driver::DriverError;

pub const CAN_OK: u8 = 0;
pub const CAN_FAILINIT: u8 = 1;
pub const CAN_FAILTX: u8 = 2;
pub const CAN_MSGAVAIL: u8 = 3;
pub const CAN_NOMSG: u8 = 4;
pub const CAN_CTRLERROR: u8 = 5;
pub const CAN_FAIL: u8 = 0xFF;

/// Legacy status code
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Status {
    /// Success
    Ok = CAN_OK,
    /// Initialization or configuration failure
    FailInit = CAN_FAILINIT,
    /// Sending failed
    FailTx = CAN_FAILTX,
    /// A message is waiting
    MsgAvailable = CAN_MSGAVAIL,
    /// No message waiting, not an error
    NoMsg = CAN_NOMSG,
    /// Aggregate error flags are non-zero
    CtrlError = CAN_CTRLERROR,
    /// Generic failure
    Fail = CAN_FAIL,
}

impl Status {
    /// Maps a raw legacy code back to its status
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            CAN_OK => Some(Self::Ok),
            CAN_FAILINIT => Some(Self::FailInit),
            CAN_FAILTX => Some(Self::FailTx),
            CAN_MSGAVAIL => Some(Self::MsgAvailable),
            CAN_NOMSG => Some(Self::NoMsg),
            CAN_CTRLERROR => Some(Self::CtrlError),
            CAN_FAIL => Some(Self::Fail),
            _ => None,
        }
    }

    /// Translates a driver result: [Status::Ok] on success, `failure` on any error
    pub(crate) fn from_result<T>(result: Result<T, DriverError>, failure: Status) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(_) => failure,
        }
    }

    /// True for [Status::Ok] only
    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status as u8
    }
}
