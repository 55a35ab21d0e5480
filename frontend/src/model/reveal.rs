use std::collections::HashSet;

/// Remembers which observed elements have already played their entrance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only the first time `key` is seen intersecting.
    pub fn mark_revealed(&mut self, key: u32, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_per_element() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.mark_revealed(3, false));
        assert!(tracker.mark_revealed(3, true));
        assert!(!tracker.mark_revealed(3, true));
        // Leaving the viewport never hides it again.
        assert!(!tracker.mark_revealed(3, false));
        assert!(tracker.is_revealed(3));
        assert!(tracker.mark_revealed(4, true));
        assert_eq!(tracker.count(), 2);
    }
}
