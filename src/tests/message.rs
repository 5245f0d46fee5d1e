use crate::frame::{CanFrame, CAN_EFF_FLAG, CAN_RTR_FLAG};
use crate::message::LastMessage;
use embedded_can::{ExtendedId, Id, StandardId};

#[test]
fn test_default_message() {
    let message = LastMessage::default();

    assert_eq!(0, message.id());
    assert!(!message.is_extended());
    assert!(message.is_empty());
    assert_eq!(0, message.filter_hit());
}

#[test]
fn test_from_standard_frame() {
    let message = LastMessage::from_frame(&CanFrame {
        can_id: 0x0001_F6A5,
        can_dlc: 3,
        data: [9, 8, 7, 6, 5, 4, 3, 2],
    });

    assert_eq!(0x6A5, message.id());
    assert!(!message.is_extended());
    assert!(!message.is_remote());
    assert_eq!(3, message.len());
    assert_eq!(&[9, 8, 7], message.data());
    assert_eq!(Id::Standard(StandardId::new(0x6A5).unwrap()), message.identifier());
}

#[test]
fn test_from_extended_frame() {
    let message = LastMessage::from_frame(&CanFrame {
        can_id: CAN_EFF_FLAG | CAN_RTR_FLAG | 0x14C92A2B,
        can_dlc: 0,
        data: [0; 8],
    });

    assert_eq!(0x14C92A2B, message.id());
    assert!(message.is_extended());
    assert!(message.is_remote());
    assert!(message.is_empty());
    assert_eq!(Id::Extended(ExtendedId::new(0x14C92A2B).unwrap()), message.identifier());
}

#[test]
fn test_from_frame_clamps_length() {
    let message = LastMessage::from_frame(&CanFrame {
        can_id: 0x123,
        can_dlc: 0xFF,
        data: [0xEE; 8],
    });

    assert_eq!(8, message.len());
    assert_eq!(&[0xEE; 8], message.data());
}
