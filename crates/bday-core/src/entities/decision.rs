//! Eligibility decision - what happens to one member this pass

use serde::Serialize;

/// Per-member outcome, computed fresh each pass and never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EligibilityDecision {
    pub grant_role: bool,
    pub include_in_message: bool,
}

impl EligibilityDecision {
    /// Neither role nor message
    pub const SKIP: Self = Self {
        grant_role: false,
        include_in_message: false,
    };

    #[inline]
    pub fn is_skip(&self) -> bool {
        !self.grant_role && !self.include_in_message
    }
}
