use crate::mocks::MockPlatform;
use crate::slots::{bind_interrupt, SlotRegistry, HANDLERS, MAX_SLOTS, NO_PIN, SLOTS};
use crate::tests::fresh_registry;
use mockall::predicate::eq;
use mockall::Sequence;

#[test]
fn test_acquire_assigns_slots_in_order() {
    let registry = SlotRegistry::new();

    for expected in 0..MAX_SLOTS {
        let slot = registry.acquire(10 + expected as u8);

        assert_eq!(expected, slot.index());
        assert!(!slot.is_shared());
        assert_eq!(10 + expected as u8, registry.pin(slot));
    }

    assert_eq!(MAX_SLOTS as u8, registry.count());
    assert!(!registry.is_overflowed());
}

#[test]
fn test_acquire_saturates_at_last_slot() {
    let registry = SlotRegistry::new();
    for _ in 0..MAX_SLOTS {
        registry.acquire(NO_PIN);
    }

    let fifth = registry.acquire(30);
    let sixth = registry.acquire(31);

    assert_eq!(MAX_SLOTS - 1, fifth.index());
    assert_eq!(MAX_SLOTS - 1, sixth.index());
    assert!(fifth.is_shared());
    assert!(sixth.is_shared());
    assert!(registry.is_overflowed());
    assert_eq!(MAX_SLOTS as u8, registry.count());

    // Last acquisition wins the pin record
    assert_eq!(31, registry.pin(sixth));
}

#[test]
fn test_flag_operations() {
    let registry = SlotRegistry::new();
    let first = registry.acquire(NO_PIN);
    let second = registry.acquire(NO_PIN);

    assert!(!registry.flag(first));

    registry.raise(first);
    assert!(registry.flag(first));
    assert!(!registry.flag(second));

    // Reading does not consume
    assert!(registry.flag(first));

    assert!(registry.take(first));
    assert!(!registry.take(first));

    registry.raise(second);
    registry.clear(second);
    assert!(!registry.flag(second));
}

#[test]
fn test_unassigned_pin() {
    let registry = SlotRegistry::default();
    let slot = registry.acquire(NO_PIN);

    assert_eq!(NO_PIN, registry.pin(slot));
}

#[test]
fn test_handlers_raise_own_slot() {
    let _registry = fresh_registry();
    let slots: Vec<_> = (0..MAX_SLOTS).map(|_| SLOTS.acquire(NO_PIN)).collect();

    for (index, handler) in HANDLERS.iter().enumerate() {
        handler();

        for slot in &slots {
            assert_eq!(slot.index() == index, SLOTS.flag(*slot));
        }

        SLOTS.clear(slots[index]);
    }
}

#[test]
fn test_bind_interrupt() {
    let _registry = fresh_registry();
    SLOTS.acquire(NO_PIN);
    let slot = SLOTS.acquire(7);

    let mut seq = Sequence::new();
    let mut platform = MockPlatform::new();
    platform
        .expect_pin_mode_input()
        .with(eq(7))
        .times(1)
        .return_const(())
        .in_sequence(&mut seq);
    platform
        .expect_attach_falling_edge()
        .withf(|pin, _| *pin == 7)
        .times(1)
        .returning(|_, handler| handler())
        .in_sequence(&mut seq);

    bind_interrupt(slot, 7, &mut platform);

    assert_eq!(1, slot.index());
    assert!(SLOTS.flag(slot));
}
