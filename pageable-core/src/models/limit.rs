use pageable_api::{PageError, PageResult};
use serde::{Deserialize, Serialize};

/// Maximum number of results an operation should produce.
///
/// Zero stands for "unlimited", so a limit of zero results cannot be
/// expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(usize);

impl Limit {
    pub const UNLIMITED: Limit = Limit(0);

    pub fn of(max: usize) -> Self {
        Limit(max)
    }

    pub fn unlimited() -> Self {
        Self::UNLIMITED
    }

    /// The maximum number of results, or `PageError::Unlimited`.
    pub fn max(&self) -> PageResult<usize> {
        if self.is_unlimited() {
            return Err(PageError::Unlimited);
        }
        Ok(self.0)
    }

    pub fn is_limited(&self) -> bool {
        self.0 != 0
    }

    pub fn is_unlimited(&self) -> bool {
        !self.is_limited()
    }
}
