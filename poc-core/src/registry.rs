//! Arena of running animations keyed by element identity.
//!
//! Each element animates at most once: `try_begin` refuses a key that is
//! running or has already completed, until `reset` forgets it. The stored
//! handle `H` is whatever cancels the task when dropped (an interval handle in
//! the browser), so `finish`/`cancel` hand it back to the caller to drop.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug)]
pub struct AnimationRegistry<K, H> {
    active: HashMap<K, Option<H>>,
    completed: HashSet<K>,
}

impl<K, H> Default for AnimationRegistry<K, H> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
            completed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, H> AnimationRegistry<K, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key` for a new animation. Returns false if it is already
    /// running or has run to completion.
    pub fn try_begin(&mut self, key: &K) -> bool {
        if self.active.contains_key(key) || self.completed.contains(key) {
            return false;
        }
        self.active.insert(key.clone(), None);
        true
    }

    /// Store the cancellation handle for a claimed key.
    ///
    /// A handle for a key that was never claimed (or already released) is
    /// returned so the caller can drop it.
    pub fn attach(&mut self, key: &K, handle: H) -> Option<H> {
        match self.active.get_mut(key) {
            Some(slot) => slot.replace(handle),
            None => Some(handle),
        }
    }

    /// Mark `key` as completed and release its handle.
    pub fn finish(&mut self, key: &K) -> Option<H> {
        self.completed.insert(key.clone());
        self.active.remove(key).flatten()
    }

    /// Stop a running animation without marking it completed.
    pub fn cancel(&mut self, key: &K) -> Option<H> {
        self.active.remove(key).flatten()
    }

    /// Forget that `key` ever completed so it can animate again.
    pub fn reset(&mut self, key: &K) {
        self.completed.remove(key);
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.contains_key(key)
    }

    pub fn has_completed(&self, key: &K) -> bool {
        self.completed.contains(key)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle that records being dropped, standing in for a timer.
    struct DropFlag(Rc<Cell<u32>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn second_begin_is_refused_while_running() {
        let mut registry: AnimationRegistry<&str, ()> = AnimationRegistry::new();
        assert!(registry.try_begin(&"metric#0"));
        assert!(!registry.try_begin(&"metric#0"), "overlapping trigger must be refused");
        assert!(registry.try_begin(&"metric#1"), "other elements are independent");
        assert_eq!(registry.active_count(), 2);
    }

    #[test]
    fn completed_key_is_refused_until_reset() {
        let mut registry: AnimationRegistry<u32, ()> = AnimationRegistry::new();
        assert!(registry.try_begin(&7));
        registry.finish(&7);

        assert!(registry.has_completed(&7));
        assert!(!registry.is_active(&7));
        assert!(!registry.try_begin(&7), "element animates only once");

        registry.reset(&7);
        assert!(registry.try_begin(&7));
    }

    #[test]
    fn finish_releases_the_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = AnimationRegistry::new();
        registry.try_begin(&"score#0");
        assert!(registry.attach(&"score#0", DropFlag(drops.clone())).is_none());

        drop(registry.finish(&"score#0"));
        assert_eq!(drops.get(), 1, "finishing must hand back the timer handle");
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn cancel_allows_a_fresh_start() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = AnimationRegistry::new();
        registry.try_begin(&1u8);
        registry.attach(&1u8, DropFlag(drops.clone()));

        drop(registry.cancel(&1u8));
        assert_eq!(drops.get(), 1);
        assert!(!registry.has_completed(&1u8));
        assert!(registry.try_begin(&1u8));
    }

    #[test]
    fn attach_without_claim_returns_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut registry = AnimationRegistry::new();
        let orphan = registry.attach(&"never-claimed", DropFlag(drops.clone()));
        assert!(orphan.is_some());
        drop(orphan);
        assert_eq!(drops.get(), 1);
        assert_eq!(registry.active_count(), 0);
    }
}
