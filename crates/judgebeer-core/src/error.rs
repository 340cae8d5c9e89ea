//! Error types for the tasting wizard.
//!
//! Scoring and report decoding never fail; these errors cover the places
//! where a caller asked for something the current wizard state forbids, or
//! handed in text that cannot be interpreted.

use thiserror::Error;

use crate::model::{Attribute, AromaTone};
use crate::wizard::Step;

/// Errors raised by [`crate::wizard::Wizard`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// The tasting was already completed; its data is read-only now.
    #[error("the tasting is already complete")]
    Completed,

    /// A transition overlay is showing and must finish first.
    #[error("a transition is in progress")]
    Transitioning,

    /// An attribute was set while a different step was on screen.
    #[error("{attribute} cannot be set on the {step} step")]
    WrongStep { attribute: Attribute, step: Step },

    /// Beer details can only be edited on the info step.
    #[error("beer details can only be edited on the info step (currently on {0})")]
    NotOnInfoStep(Step),

    /// The hop sediment checkbox lives on the appearance step.
    #[error("hop sediment can only be marked on the appearance step (currently on {0})")]
    NotOnAppearanceStep(Step),

    /// Aroma sub-navigation used outside the aroma step.
    #[error("aroma categories are only available on the aroma step")]
    NotOnAromaStep,

    /// Opened an aroma attribute outside the currently selected tone.
    #[error("{attribute} is not a {tone:?} aroma")]
    ToneMismatch {
        attribute: Attribute,
        tone: AromaTone,
    },

    /// An aroma attribute was opened from the aroma root page.
    #[error("choose pleasant or unpleasant aromas first")]
    NoToneSelected,

    /// `complete()` called before reaching the last step.
    #[error("the tasting can only be completed on the final step (currently on {0})")]
    NotAtFinalStep(Step),
}

/// Top-level error for the core crate.
#[derive(Debug, Error)]
pub enum TastingError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// A date that is not `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown beer style: {0}")]
    UnknownStyle(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("expected yes or no, got '{0}'")]
    InvalidFlag(String),
}

impl TastingError {
    /// Returns `true` if the error comes from the wizard refusing a transition
    /// rather than from bad input.
    pub fn is_state_error(&self) -> bool {
        matches!(self, TastingError::Wizard(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_step_message_names_both_sides() {
        let err = WizardError::WrongStep {
            attribute: Attribute::Body,
            step: Step::Taste,
        };
        assert_eq!(err.to_string(), "body cannot be set on the taste step");
    }

    #[test]
    fn state_errors_are_classified() {
        let err: TastingError = WizardError::Completed.into();
        assert!(err.is_state_error());
        assert!(!TastingError::InvalidDate("x".into()).is_state_error());
        assert!(!TastingError::InvalidNumber("lots".into()).is_state_error());
    }

    #[test]
    fn input_errors_quote_the_value() {
        assert_eq!(
            TastingError::UnknownStyle("Mead".into()).to_string(),
            "unknown beer style: Mead"
        );
        assert_eq!(
            TastingError::InvalidFlag("maybe".into()).to_string(),
            "expected yes or no, got 'maybe'"
        );
    }
}
