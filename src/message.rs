//!# Last received message
//! Legacy callers read the identifier, format and payload of the most recently received frame
//! after a successful read. [LastMessage] holds that state per controller instance.

use crate::frame::{CanFrame, MAX_PAYLOAD};
use embedded_can::{ExtendedId, Frame, Id, StandardId};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LastMessage {
    extended: bool,
    /// 29 bits if extended, 11 bits otherwise
    id: u32,
    /// Always within 0..=8
    len: u8,
    data: [u8; MAX_PAYLOAD],
    rtr: bool,
    /// Reserved, the wrapped driver does not report the matching filter
    filter_hit: u8,
}

impl LastMessage {
    /// Captures the state of a received frame, stripping flag bits and clamping the length
    pub fn from_frame(frame: &CanFrame) -> Self {
        let len = frame.len();

        let mut data = [0u8; MAX_PAYLOAD];
        data[..len].copy_from_slice(&frame.data[..len]);

        Self {
            extended: frame.has_extended_flag(),
            id: frame.raw_id(),
            len: len as u8,
            data,
            rtr: frame.is_remote_frame(),
            filter_hit: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_extended(&self) -> bool {
        self.extended
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Payload bytes, `len()` long
    pub fn data(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    pub fn is_remote(&self) -> bool {
        self.rtr
    }

    pub fn filter_hit(&self) -> u8 {
        self.filter_hit
    }

    /// Identifier as [embedded_can::Id]
    pub fn identifier(&self) -> Id {
        if self.extended {
            Id::Extended(ExtendedId::new(self.id).unwrap_or(ExtendedId::MAX))
        } else {
            Id::Standard(StandardId::new(self.id as u16).unwrap_or(StandardId::MAX))
        }
    }
}
