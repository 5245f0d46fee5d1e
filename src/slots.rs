//!# Interrupt slot registry
//! Interrupt handlers attached to a GPIO line take no arguments, so they cannot know which
//! controller they belong to. The registry provides [MAX_SLOTS] pre-bound handlers, each setting
//! the "message pending" flag of its own slot. Every controller acquires a slot on construction.
//!
//! More than [MAX_SLOTS] controllers are not rejected: the fifth and later instances share the
//! last slot, which is reported by [Slot::is_shared] and [SlotRegistry::is_overflowed].
//!
//! Flags are only raised by the handlers. Controllers consume them with [SlotRegistry::take] and
//! re-raise them if the pending condition still holds, so an interrupt arriving while the driver
//! is queried is never lost.
//!
//! ```
//!# use mcp2515_legacy::slots::SlotRegistry;
//! let registry = SlotRegistry::new();
//!
//! let first = registry.acquire(21);
//! assert_eq!(0, first.index());
//!
//! registry.raise(first);
//! assert!(registry.flag(first));
//! assert!(registry.take(first));
//! assert!(!registry.flag(first));
//! ```

use crate::platform::InterruptPlatform;
use log::{debug, warn};
use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Number of independent interrupt slots
pub const MAX_SLOTS: usize = 4;

/// Unassigned interrupt pin
pub const NO_PIN: u8 = 255;

/// Slot identity of a controller, immutable once acquired
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Slot {
    index: u8,
    shared: bool,
}

impl Slot {
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// True if this slot was handed out again because all slots were taken
    pub fn is_shared(&self) -> bool {
        self.shared
    }
}

/// Fixed capacity table of pending flags and pin assignments
pub struct SlotRegistry {
    flags: [AtomicBool; MAX_SLOTS],
    pins: [AtomicU8; MAX_SLOTS],
    count: AtomicU8,
    overflowed: AtomicBool,
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotRegistry {
    pub const fn new() -> Self {
        Self {
            flags: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
            pins: [
                AtomicU8::new(NO_PIN),
                AtomicU8::new(NO_PIN),
                AtomicU8::new(NO_PIN),
                AtomicU8::new(NO_PIN),
            ],
            count: AtomicU8::new(0),
            overflowed: AtomicBool::new(false),
        }
    }

    /// Assigns the next free slot and records its pin. Saturates at the last slot.
    pub fn acquire(&self, pin: u8) -> Slot {
        let slot = match self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                ((count as usize) < MAX_SLOTS).then_some(count + 1)
            }) {
            Ok(index) => Slot { index, shared: false },
            Err(_) => {
                self.overflowed.store(true, Ordering::SeqCst);
                warn!("All {MAX_SLOTS} interrupt slots in use, sharing slot {}", MAX_SLOTS - 1);

                Slot {
                    index: (MAX_SLOTS - 1) as u8,
                    shared: true,
                }
            }
        };

        self.pins[slot.index()].store(pin, Ordering::SeqCst);
        slot
    }

    /// Number of slots handed out
    pub fn count(&self) -> u8 {
        self.count.load(Ordering::SeqCst)
    }

    /// True once more controllers than slots were created
    pub fn is_overflowed(&self) -> bool {
        self.overflowed.load(Ordering::SeqCst)
    }

    /// Pin assigned to the slot, [NO_PIN] if none
    pub fn pin(&self, slot: Slot) -> u8 {
        self.pins[slot.index()].load(Ordering::SeqCst)
    }

    /// Reads the pending flag without clearing it
    pub fn flag(&self, slot: Slot) -> bool {
        self.flags[slot.index()].load(Ordering::SeqCst)
    }

    /// Sets the pending flag
    pub fn raise(&self, slot: Slot) {
        self.flags[slot.index()].store(true, Ordering::SeqCst);
    }

    pub fn clear(&self, slot: Slot) {
        self.flags[slot.index()].store(false, Ordering::SeqCst);
    }

    /// Clears the pending flag and returns its previous value
    pub fn take(&self, slot: Slot) -> bool {
        self.flags[slot.index()].swap(false, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn reset(&self) {
        for (flag, pin) in self.flags.iter().zip(self.pins.iter()) {
            flag.store(false, Ordering::SeqCst);
            pin.store(NO_PIN, Ordering::SeqCst);
        }
        self.count.store(0, Ordering::SeqCst);
        self.overflowed.store(false, Ordering::SeqCst);
    }
}

/// Process-wide registry used by all controllers
pub static SLOTS: SlotRegistry = SlotRegistry::new();

fn on_interrupt_0() {
    SLOTS.flags[0].store(true, Ordering::SeqCst);
}

fn on_interrupt_1() {
    SLOTS.flags[1].store(true, Ordering::SeqCst);
}

fn on_interrupt_2() {
    SLOTS.flags[2].store(true, Ordering::SeqCst);
}

fn on_interrupt_3() {
    SLOTS.flags[3].store(true, Ordering::SeqCst);
}

/// Pre-bound handler of each slot of [SLOTS]
pub const HANDLERS: [fn(); MAX_SLOTS] = [on_interrupt_0, on_interrupt_1, on_interrupt_2, on_interrupt_3];

/// Configures the pin as input and attaches the handler of the given slot to its falling edge
pub fn bind_interrupt<P: InterruptPlatform>(slot: Slot, pin: u8, platform: &mut P) {
    debug!("Binding interrupt slot {} to pin {pin}", slot.index());

    platform.pin_mode_input(pin);
    platform.attach_falling_edge(pin, HANDLERS[slot.index()]);
}
