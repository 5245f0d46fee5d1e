//!# Raw wire frame
//! [CanFrame] is the frame representation exchanged with the wrapped driver. The identifier word
//! carries the frame flags in its upper bits, the lower 29 bits hold the identifier.
//!
//! ```
//!# use mcp2515_legacy::frame::{CanFrame, CAN_EFF_FLAG};
//!# use embedded_can::{ExtendedId, Frame, Id};
//! let id = ExtendedId::new(0x14C92A2B).unwrap();
//! let frame = CanFrame::new(id, &[0xAA, 0xBB]).unwrap();
//!
//! assert_eq!(0x14C92A2B | CAN_EFF_FLAG, frame.can_id);
//! assert_eq!(Id::Extended(id), frame.id());
//! assert_eq!(&[0xAA, 0xBB], frame.data());
//! ```

use embedded_can::{ExtendedId, Frame, Id, StandardId};

/// Extended frame format marker
pub const CAN_EFF_FLAG: u32 = 0x8000_0000;

/// Remote transmission request marker
pub const CAN_RTR_FLAG: u32 = 0x4000_0000;

/// Error frame marker
pub const CAN_ERR_FLAG: u32 = 0x2000_0000;

/// Standard frame identifier bits
pub const CAN_SFF_MASK: u32 = 0x0000_07FF;

/// Extended frame identifier bits
pub const CAN_EFF_MASK: u32 = 0x1FFF_FFFF;

/// Maximum payload of a CAN 2.0 frame
pub const MAX_PAYLOAD: usize = 8;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CanFrame {
    /// Identifier combined with [CAN_EFF_FLAG], [CAN_RTR_FLAG] and [CAN_ERR_FLAG]
    pub can_id: u32,
    /// Data length code as reported by the driver, not necessarily <= 8
    pub can_dlc: u8,
    pub data: [u8; MAX_PAYLOAD],
}

impl CanFrame {
    /// Frame carries the extended frame marker
    pub fn has_extended_flag(&self) -> bool {
        self.can_id & CAN_EFF_FLAG != 0
    }

    /// Identifier without flag bits, masked to 29 or 11 bits
    pub fn raw_id(&self) -> u32 {
        if self.has_extended_flag() {
            self.can_id & CAN_EFF_MASK
        } else {
            self.can_id & CAN_SFF_MASK
        }
    }

    /// Data length code clamped to [MAX_PAYLOAD]
    pub fn len(&self) -> usize {
        (self.can_dlc as usize).min(MAX_PAYLOAD)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > MAX_PAYLOAD {
            return None;
        }

        let mut frame = CanFrame {
            can_id: encode_id(id.into()),
            can_dlc: data.len() as u8,
            data: [0; MAX_PAYLOAD],
        };
        frame.data[..data.len()].copy_from_slice(data);

        Some(frame)
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > MAX_PAYLOAD {
            return None;
        }

        Some(CanFrame {
            can_id: encode_id(id.into()) | CAN_RTR_FLAG,
            can_dlc: dlc as u8,
            data: [0; MAX_PAYLOAD],
        })
    }

    fn is_extended(&self) -> bool {
        self.has_extended_flag()
    }

    fn is_remote_frame(&self) -> bool {
        self.can_id & CAN_RTR_FLAG != 0
    }

    fn id(&self) -> Id {
        if self.has_extended_flag() {
            Id::Extended(ExtendedId::new(self.raw_id()).unwrap_or(ExtendedId::MAX))
        } else {
            Id::Standard(StandardId::new(self.raw_id() as u16).unwrap_or(StandardId::MAX))
        }
    }

    fn dlc(&self) -> usize {
        self.len()
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.len()]
    }
}

fn encode_id(id: Id) -> u32 {
    match id {
        Id::Standard(sid) => sid.as_raw() as u32,
        Id::Extended(eid) => eid.as_raw() | CAN_EFF_FLAG,
    }
}
