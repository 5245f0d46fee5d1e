#![allow(unused_braces)]
#![allow(unused_parens)]
use modular_bitfield_msb::prelude::*;

#[bitfield]
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
/// CANINTF, interrupt flag register
pub struct InterruptFlags {
    /// Message Error Interrupt Flag bit
    pub merrf: bool,
    /// Wake-up Interrupt Flag bit
    pub wakif: bool,
    /// Error Interrupt Flag bit
    pub errif: bool,
    /// Transmit Buffer 2 Empty Interrupt Flag bit
    pub tx2if: bool,
    /// Transmit Buffer 1 Empty Interrupt Flag bit
    pub tx1if: bool,
    /// Transmit Buffer 0 Empty Interrupt Flag bit
    pub tx0if: bool,
    /// Receive Buffer 1 Full Interrupt Flag bit
    pub rx1if: bool,
    /// Receive Buffer 0 Full Interrupt Flag bit
    pub rx0if: bool,
}

impl InterruptFlags {
    /// True if any of the two receive buffers holds a message
    pub fn rx_pending(&self) -> bool {
        self.rx0if() || self.rx1if()
    }
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
/// EFLG, error flag register
pub struct ErrorFlags {
    /// Receive Buffer 1 Overflow Flag bit
    pub rx1ovr: bool,
    /// Receive Buffer 0 Overflow Flag bit
    pub rx0ovr: bool,
    /// Bus-Off Error Flag bit
    pub txbo: bool,
    /// Transmit Error-Passive Flag bit
    pub txep: bool,
    /// Receive Error-Passive Flag bit
    pub rxep: bool,
    /// Transmit Error Warning Flag bit
    pub txwar: bool,
    /// Receive Error Warning Flag bit
    pub rxwar: bool,
    /// Error Warning Flag bit
    pub ewarn: bool,
}

impl ErrorFlags {
    /// Transmit error counter reached 255
    pub fn is_bus_off(&self) -> bool {
        self.txbo()
    }

    /// Transmit or receive error counter reached 128
    pub fn is_error_passive(&self) -> bool {
        self.txep() || self.rxep()
    }

    /// A message was lost because a receive buffer was still full
    pub fn has_rx_overflow(&self) -> bool {
        self.rx0ovr() || self.rx1ovr()
    }

    /// Any of the warning flags is set
    pub fn has_warning(&self) -> bool {
        self.ewarn() || self.txwar() || self.rxwar()
    }
}
