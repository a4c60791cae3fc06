use serde::{Deserialize, Serialize};

/// Absolute offset into a result set, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetScrollPosition(usize);

impl OffsetScrollPosition {
    pub const INITIAL: OffsetScrollPosition = OffsetScrollPosition(0);

    pub fn of(offset: usize) -> Self {
        OffsetScrollPosition(offset)
    }

    pub fn initial() -> Self {
        Self::INITIAL
    }

    pub fn offset(&self) -> usize {
        self.0
    }

    /// Move by `delta` positions. Moving back past the start stops at zero.
    pub fn advance_by(&self, delta: isize) -> Self {
        OffsetScrollPosition(self.0.saturating_add_signed(delta))
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial() {
        assert!(OffsetScrollPosition::initial().is_initial());
        assert!(OffsetScrollPosition::default().is_initial());
        assert!(!OffsetScrollPosition::of(3).is_initial());
    }

    #[test]
    fn test_advance_by() {
        assert_eq!(OffsetScrollPosition::of(5).advance_by(10).offset(), 15);
        assert_eq!(OffsetScrollPosition::of(5).advance_by(-3).offset(), 2);
        assert_eq!(OffsetScrollPosition::of(5).advance_by(-5).offset(), 0);
    }

    #[test]
    fn test_advance_by_clamps_at_zero() {
        let position = OffsetScrollPosition::of(5).advance_by(-10);
        assert_eq!(position.offset(), 0);
        assert!(position.is_initial());
    }

    proptest! {
        #[test]
        fn prop_advance_never_goes_negative(offset in 0usize..1_000_000, delta in -2_000_000isize..2_000_000) {
            let advanced = OffsetScrollPosition::of(offset).advance_by(delta);
            let expected = (offset as i128 + delta as i128).max(0) as usize;
            prop_assert_eq!(advanced.offset(), expected);
        }
    }
}
