//! The modal form used to add an appointment.

use crate::entry::Appointment;
use crate::error::ValidationError;
use crate::list::AppointmentList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

/// Form visibility plus the unsaved draft.
///
/// Text fields take anything while the form is open; checks only happen on
/// `submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    state: FormState,
    date: String,
    item: String,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn open(&mut self) {
        self.state = FormState::Open;
    }

    /// Dismiss the form without saving anything.
    pub fn back(&mut self) {
        self.state = FormState::Closed;
        self.clear();
    }

    pub fn set_date(&mut self, text: impl Into<String>) {
        if self.is_open() {
            self.date = text.into();
        }
    }

    pub fn set_item(&mut self, text: impl Into<String>) {
        if self.is_open() {
            self.item = text.into();
        }
    }

    /// Commit the draft into `list`.
    ///
    /// On success the form closes and the draft is cleared. On failure the
    /// form stays open with the draft untouched.
    pub fn submit(&mut self, list: &mut AppointmentList) -> Result<Appointment, ValidationError> {
        let added = list.add(&self.date, &self.item)?.clone();
        self.state = FormState::Closed;
        self.clear();
        Ok(added)
    }

    fn clear(&mut self) {
        self.date.clear();
        self.item.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_and_empty() {
        let form = EntryForm::new();
        assert_eq!(form.state(), FormState::Closed);
        assert_eq!(form.date(), "");
        assert_eq!(form.item(), "");
    }

    #[test]
    fn test_submit_closes_and_clears() {
        let mut list = AppointmentList::new();
        let mut form = EntryForm::new();

        form.open();
        form.set_date("10/10");
        form.set_item("Dentist");
        let added = form.submit(&mut list).unwrap();

        assert_eq!(added, Appointment::new("10/10", "Dentist"));
        assert_eq!(list.entries(), &[Appointment::new("10/10", "Dentist")]);
        assert_eq!(form.state(), FormState::Closed);
        assert_eq!(form.date(), "");
        assert_eq!(form.item(), "");
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut list = AppointmentList::new();
        let mut form = EntryForm::new();

        form.open();
        form.set_date("10/10");
        assert_eq!(form.submit(&mut list), Err(ValidationError::EmptyFields));

        assert!(form.is_open());
        assert_eq!(form.date(), "10/10");
        assert!(list.is_empty());
    }

    #[test]
    fn test_back_discards_draft() {
        let mut list = AppointmentList::new();
        let mut form = EntryForm::new();

        form.open();
        form.set_date("10/10");
        form.set_item("Dentist");
        form.back();

        assert_eq!(form, EntryForm::new());
        assert!(list.is_empty());
        assert!(!list.is_dirty());

        form.open();
        assert_eq!(form.submit(&mut list), Err(ValidationError::EmptyFields));
    }

    #[test]
    fn test_fields_ignored_while_closed() {
        let mut form = EntryForm::new();
        form.set_date("10/10");
        form.set_item("Dentist");
        assert_eq!(form.date(), "");
        assert_eq!(form.item(), "");
    }
}
