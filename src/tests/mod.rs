use crate::slots::SLOTS;
use std::sync::{Mutex, MutexGuard};

mod message;
mod slots;

static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests using the global slot registry and resets it
pub(crate) fn fresh_registry() -> MutexGuard<'static, ()> {
    let guard = REGISTRY_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    SLOTS.reset();
    guard
}
