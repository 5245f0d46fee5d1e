#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

//! # Legacy CAN API for MCP2515 controllers
//!
//! Offers the classic status-code based CAN interface (`begin`, masks/filters, send and read by
//! buffer, interrupt or polling based receive checks) on top of a register-level [driver](driver::CanDriver).
//!
//! Crate currently offer the following features:
//! * Legacy status codes, bit-compatible with the historic `CAN_*` values
//! * Up to four controllers with independent INT lines
//! * Standard and extended ID formats for CAN frames
//! * Diagnostics and raw driver access
//! * no_std support
//!
//!## CAN Tx/Rx example
//!
//!```
//!use mcp2515_legacy::can::Controller;
//!use mcp2515_legacy::config::SpeedConfig;
//!use mcp2515_legacy::example::{ExampleDriver, ExamplePlatform};
//!use mcp2515_legacy::status::Status;
//!
//!let mut platform = ExamplePlatform::default();
//!
//!// Polling only controller
//!let mut controller = Controller::polling(ExampleDriver::default());
//!assert_eq!(Status::Ok, controller.begin(SpeedConfig::Kbps500MHz8 as u8, &mut platform));
//!
//!// Only accept standard frames 0x100-0x1FF
//!assert_eq!(Status::Ok, controller.init_mask(0, false, 0x700));
//!assert_eq!(Status::Ok, controller.init_filter(0, false, 0x100));
//!
//!// Transmit CAN message
//!assert_eq!(Status::Ok, controller.send(0x123, false, 3, &[1, 2, 3]));
//!
//!// Receive CAN message
//!assert_eq!(Status::MsgAvailable, controller.check_poll());
//!
//!let mut len = 0;
//!let mut buff = [0u8; 8];
//!assert_eq!(Status::Ok, controller.read_into(Some(&mut len), Some(&mut buff)));
//!assert_eq!(3, len);
//!assert_eq!([1, 2, 3], buff[..3]);
//!assert_eq!(0x123, controller.can_id());
//!
//!assert_eq!(Status::NoMsg, controller.check_poll());
//!```

pub mod can;
pub mod config;
pub mod driver;
pub mod filter;
pub mod frame;
pub mod message;
pub mod platform;
pub mod registers;
pub mod slots;
pub mod status;

mod diagnostics;
mod raw;

pub mod example;
#[cfg(test)]
pub(crate) mod mocks;
#[cfg(test)]
mod tests;
