//! Events the form controller emits for its routing collaborator

use registration_validation::{ErrorMap, FieldKey};

use crate::bundle::SubmissionBundle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Every field passed; hand the bundle to the confirmation view
    SubmissionCompleted(SubmissionBundle),

    /// At least one field failed; the view should focus `focus`
    SubmissionRejected { focus: FieldKey, errors: ErrorMap },
}

impl FormEvent {
    pub fn is_completed(&self) -> bool {
        matches!(self, FormEvent::SubmissionCompleted(_))
    }
}
