//! Eligibility rules
//!
//! Decides, per member with a birthday record, whether they get the birthday
//! role and whether they are named in the birthday message. Pure: no I/O.

use bday_core::{EligibilityDecision, GuildMember, GuildSettings, ResolvedContext};

/// Everything the rule matrix looks at for one member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityInput {
    /// A trusted role is configured and resolved
    pub trusted_role_present: bool,
    pub holds_trusted_role: bool,
    /// Guild gate: role only for trusted members
    pub prevent_role: bool,
    /// Guild gate: message only for trusted members
    pub prevent_message: bool,
    pub role_due: bool,
    pub message_due: bool,
}

impl EligibilityInput {
    /// Collect the guild/member half of the input; time signals are added by the caller
    pub fn for_member(
        settings: &GuildSettings,
        resolved: &ResolvedContext,
        member: &GuildMember,
    ) -> Self {
        Self {
            trusted_role_present: resolved.trusted_role.is_some(),
            holds_trusted_role: resolved.is_trusted(member),
            prevent_role: settings.trusted_prevents_role,
            prevent_message: settings.trusted_prevents_message,
            role_due: false,
            message_due: false,
        }
    }

    pub fn with_signals(mut self, role_due: bool, message_due: bool) -> Self {
        self.role_due = role_due;
        self.message_due = message_due;
        self
    }

    /// Untrusted member in a guild whose gate applies
    #[inline]
    fn gated(&self, gate: bool) -> bool {
        self.trusted_role_present && gate && !self.holds_trusted_role
    }
}

/// Why one axis came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOutcome {
    Eligible,
    NotDue,
    TrustedGate,
    /// Both gates on and the member is untrusted; the member was skipped outright
    TrustedSkip,
}

impl AxisOutcome {
    #[inline]
    pub fn is_eligible(self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Decision plus per-axis reasons, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub decision: EligibilityDecision,
    pub role: AxisOutcome,
    pub message: AxisOutcome,
}

/// The rule matrix
pub struct EligibilityEvaluator;

impl EligibilityEvaluator {
    /// Decide role and message eligibility
    pub fn evaluate(input: EligibilityInput) -> EligibilityDecision {
        Self::explain(input).decision
    }

    /// Decide and report why
    pub fn explain(input: EligibilityInput) -> Evaluation {
        // Both gates together exclude untrusted members before either axis is looked at.
        if input.gated(input.prevent_role && input.prevent_message) {
            return Evaluation {
                decision: EligibilityDecision::SKIP,
                role: AxisOutcome::TrustedSkip,
                message: AxisOutcome::TrustedSkip,
            };
        }

        let role = Self::axis(input.role_due, input.gated(input.prevent_role));
        let message = Self::axis(input.message_due, input.gated(input.prevent_message));

        Evaluation {
            decision: EligibilityDecision {
                grant_role: role.is_eligible(),
                include_in_message: message.is_eligible(),
            },
            role,
            message,
        }
    }

    fn axis(due: bool, gated: bool) -> AxisOutcome {
        if !due {
            AxisOutcome::NotDue
        } else if gated {
            AxisOutcome::TrustedGate
        } else {
            AxisOutcome::Eligible
        }
    }
}
