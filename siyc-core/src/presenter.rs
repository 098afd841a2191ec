use std::collections::BTreeMap;

use crate::validation::{Field, FieldError, FormReport};

/// How long a general (non-field) error stays visible.
pub const GENERAL_ERROR_TTL_MS: u32 = 5_000;
pub const OFFLINE_MESSAGE: &str = "No internet connection. Please check your network and try again.";

/// Display class of a user-visible failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Shown inline next to the offending field.
    Validation,
    /// Shown as the general banner; timeouts land here too.
    Network,
    /// Shown as the general banner.
    Server,
    /// Shown as a blocking alert.
    File,
}

/// Where a message is displayed: next to one input, or in the banner at the top of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSlot {
    Field(Field),
    General,
}

impl ErrorSlot {
    /// DOM id of the element holding the message.
    #[must_use]
    pub fn element_id(self) -> String {
        match self {
            Self::Field(field) => format!("{}-error", field.key()),
            Self::General => "general-error".to_string(),
        }
    }
}

/// Messages currently on screen for the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBoard {
    shown: BTreeMap<ErrorSlot, String>,
}

impl ErrorBoard {
    pub fn show(&mut self, slot: ErrorSlot, message: impl Into<String>) {
        self.shown.insert(slot, message.into());
    }

    pub fn clear(&mut self, slot: ErrorSlot) {
        self.shown.remove(&slot);
    }

    /// Clear `slot` only while it still shows `message`. Returns whether it was cleared.
    pub fn clear_if_showing(&mut self, slot: ErrorSlot, message: &str) -> bool {
        if self.message(slot) == Some(message) {
            self.clear(slot);
            true
        } else {
            false
        }
    }

    pub fn show_field(&mut self, err: FieldError) {
        self.show(ErrorSlot::Field(err.field()), err.to_string());
    }

    /// Show every failure of a validation pass. Fields that passed keep whatever they showed.
    pub fn apply_report(&mut self, report: &FormReport) {
        for err in report.errors() {
            self.show_field(*err);
        }
    }

    /// Reflect a single-field check: show its reason or clear it.
    pub fn apply_field(&mut self, field: Field, outcome: Result<(), FieldError>) {
        match outcome {
            Ok(()) => self.clear(ErrorSlot::Field(field)),
            Err(err) => self.show_field(err),
        }
    }

    #[must_use]
    pub fn message(&self, slot: ErrorSlot) -> Option<&str> {
        self.shown.get(&slot).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorSlot, &str)> {
        self.shown.iter().map(|(slot, msg)| (*slot, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{RegistrationDraft, validate_field, validate_form};

    #[test]
    fn expiring_message_leaves_newer_one_alone() {
        let mut board = ErrorBoard::default();
        board.show(ErrorSlot::General, "Network error");
        board.show(ErrorSlot::General, OFFLINE_MESSAGE);
        assert!(!board.clear_if_showing(ErrorSlot::General, "Network error"));
        assert_eq!(board.message(ErrorSlot::General), Some(OFFLINE_MESSAGE));
        assert!(board.clear_if_showing(ErrorSlot::General, OFFLINE_MESSAGE));
        assert!(board.is_empty());
    }

    #[test]
    fn slots_map_to_dom_ids() {
        assert_eq!(ErrorSlot::Field(Field::Email).element_id(), "email-error");
        assert_eq!(ErrorSlot::General.element_id(), "general-error");
    }

    #[test]
    fn report_fills_each_failing_field() {
        let draft = RegistrationDraft {
            name: "Ravi".into(),
            email: "nope".into(),
            phone: String::new(),
            status: None,
        };
        let report = validate_form(&draft).unwrap_err();
        let mut board = ErrorBoard::default();
        board.apply_report(&report);
        assert_eq!(board.message(ErrorSlot::Field(Field::Name)), None);
        assert_eq!(
            board.message(ErrorSlot::Field(Field::Email)),
            Some("Please enter a valid email")
        );
        assert_eq!(
            board.message(ErrorSlot::Field(Field::Phone)),
            Some("Phone number is required")
        );
        assert_eq!(
            board.message(ErrorSlot::Field(Field::Status)),
            Some("Please select your status")
        );
    }

    #[test]
    fn field_check_clears_once_fixed() {
        let mut draft = RegistrationDraft::default();
        let mut board = ErrorBoard::default();
        board.apply_field(Field::Name, validate_field(Field::Name, &draft));
        assert_eq!(
            board.message(ErrorSlot::Field(Field::Name)),
            Some("Name is required")
        );

        draft.name = "Meera".into();
        board.apply_field(Field::Name, validate_field(Field::Name, &draft));
        assert!(board.is_empty());
    }

    #[test]
    fn general_banner_is_independent_of_fields() {
        let mut board = ErrorBoard::default();
        board.show(ErrorSlot::General, OFFLINE_MESSAGE);
        board.show_field(FieldError::NameMissing);
        board.clear(ErrorSlot::Field(Field::Name));
        assert_eq!(board.message(ErrorSlot::General), Some(OFFLINE_MESSAGE));
        assert_eq!(board.iter().count(), 1);
    }
}
