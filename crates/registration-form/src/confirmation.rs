// File: src/confirmation.rs
// Purpose: View model for the post-submission summary

use registration_validation::FieldKey;

use crate::bundle::SubmissionBundle;
use crate::router::Route;

pub const CONFIRMATION_HEADING: &str = "Form Submitted Successfully!";

/// One `label: value` row of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub field: FieldKey,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationPage {
    /// Nothing to show; send the user back
    Redirect(Route),
    Summary {
        heading: &'static str,
        lines: Vec<SummaryLine>,
    },
}

pub struct ConfirmationView;

impl ConfirmationView {
    /// Build the page for the hand-off state, if any
    pub fn open(bundle: Option<&SubmissionBundle>) -> ConfirmationPage {
        let Some(bundle) = bundle else {
            return ConfirmationPage::Redirect(Route::Entry);
        };

        let lines = bundle
            .iter()
            .map(|(field, value)| SummaryLine {
                field,
                label: summary_label(field.as_str()),
                value: value.to_string(),
            })
            .collect();

        ConfirmationPage::Summary {
            heading: CONFIRMATION_HEADING,
            lines,
        }
    }
}

/// `phoneNumber` -> `Phone Number`
pub fn summary_label(wire_name: &str) -> String {
    let mut label = String::with_capacity(wire_name.len() + 4);
    let mut word_start = true;

    for c in wire_name.chars() {
        if c.is_ascii_uppercase() && !label.is_empty() {
            label.push(' ');
            word_start = true;
        }
        if word_start {
            label.extend(c.to_uppercase());
            word_start = false;
        } else {
            label.push(c);
        }
    }

    label
}
