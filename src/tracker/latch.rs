use std::collections::HashMap;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// One-way flag: unset until the first observation at or above the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    revealed: bool,
}

impl VisibilityLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only for the observation that flips the latch. An element
    /// with nothing visible never counts, whatever the threshold.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.revealed || ratio.is_nan() || ratio <= 0.0 || ratio < threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealKey(u64);

/// Latches for every element currently observed, keyed by a handle handed out
/// at registration. Keys are never reused.
#[derive(Debug)]
pub struct RevealRegistry {
    threshold: f64,
    next_key: u64,
    latches: HashMap<RevealKey, VisibilityLatch>,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealRegistry {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            next_key: 0,
            latches: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn register(&mut self) -> RevealKey {
        let key = RevealKey(self.next_key);
        self.next_key += 1;
        self.latches.insert(key, VisibilityLatch::default());
        key
    }

    /// Feed an intersection ratio for `key`. Returns `true` when this
    /// observation revealed the element; unknown keys are ignored.
    pub fn observe(&mut self, key: RevealKey, ratio: f64) -> bool {
        let threshold = self.threshold;
        match self.latches.get_mut(&key) {
            Some(latch) => {
                let flipped = latch.observe(ratio, threshold);
                if flipped {
                    log::debug!("reveal {key:?} at ratio {ratio:.2}");
                }
                flipped
            }
            None => false,
        }
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.latches
            .get(&key)
            .is_some_and(VisibilityLatch::is_revealed)
    }

    /// Drop the entry for an unmounted element. Returns whether it existed.
    pub fn unregister(&mut self, key: RevealKey) -> bool {
        self.latches.remove(&key).is_some()
    }

    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_reveals_once() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(0.05, 0.1));
        assert!(!latch.is_revealed());

        assert!(latch.observe(0.15, 0.1));
        assert!(latch.is_revealed());

        // scrolled back out of view
        assert!(!latch.observe(0.0, 0.1));
        assert!(latch.is_revealed());
        assert!(!latch.observe(1.0, 0.1));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_threshold_is_inclusive() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(0.1, 0.1));
    }

    #[test]
    fn test_zero_threshold_needs_something_visible() {
        let mut registry = RevealRegistry::new(0.0);
        let key = registry.register();
        assert!(!registry.observe(key, 0.0));
        assert!(!registry.is_revealed(key));
        assert!(registry.observe(key, 0.01));
    }

    #[test]
    fn test_latch_ignores_nan() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(f64::NAN, 0.1));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_registry_tracks_elements_independently() {
        let mut registry = RevealRegistry::default();
        let card = registry.register();
        let footer = registry.register();
        assert_ne!(card, footer);

        assert!(registry.observe(card, 0.15));
        assert!(registry.is_revealed(card));
        assert!(!registry.is_revealed(footer));

        assert!(!registry.observe(card, 0.0));
        assert!(registry.is_revealed(card));

        assert!(!registry.observe(footer, 0.02));
        assert!(registry.observe(footer, 0.5));
        assert!(!registry.observe(footer, 0.9));
    }

    #[test]
    fn test_revealed_never_reverts() {
        let mut registry = RevealRegistry::new(0.25);
        let key = registry.register();
        let ratios = [0.0, 0.1, 0.3, 0.0, 0.2, 1.0, 0.0];
        let mut seen_reveal = false;
        for ratio in ratios {
            let flipped = registry.observe(key, ratio);
            assert!(!(flipped && seen_reveal), "revealed twice");
            seen_reveal |= flipped;
            assert_eq!(registry.is_revealed(key), seen_reveal);
        }
        assert!(seen_reveal);
    }

    #[test]
    fn test_unregister_removes_entry() {
        let mut registry = RevealRegistry::default();
        let key = registry.register();
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(key));
        assert!(registry.is_empty());
        assert!(!registry.unregister(key));

        // late callbacks for a removed element are ignored
        assert!(!registry.observe(key, 1.0));
        assert!(!registry.is_revealed(key));

        let fresh = registry.register();
        assert_ne!(fresh, key);
    }
}
