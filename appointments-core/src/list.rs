//! The in-memory, ordered appointment collection.

use crate::entry::Appointment;
use crate::error::ValidationError;

/// Appointments in insertion order, which is also display order.
///
/// Tracks whether it changed since the last successful save, so loading
/// stored data never triggers a write by itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentList {
    entries: Vec<Appointment>,
    dirty: bool,
}

impl AppointmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries that came from storage. The result is clean.
    pub fn from_loaded(entries: Vec<Appointment>) -> Self {
        AppointmentList {
            entries,
            dirty: false,
        }
    }

    pub fn entries(&self) -> &[Appointment] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Append a new entry at the end.
    ///
    /// Both fields must be non-empty; otherwise nothing changes. Any other
    /// text, whitespace included, is stored as typed.
    pub fn add(&mut self, date: &str, description: &str) -> Result<&Appointment, ValidationError> {
        if date.is_empty() || description.is_empty() {
            return Err(ValidationError::EmptyFields);
        }

        self.entries.push(Appointment::new(date, description));
        self.dirty = true;

        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Remove every entry sharing `entry`'s date key.
    ///
    /// Entries are matched by key alone, so two appointments on the same date
    /// go together. Returns how many were removed.
    pub fn remove(&mut self, entry: &Appointment) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != entry.key);

        let removed = before - self.entries.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// Number of entries whose key equals `key`.
    pub fn count_with_key(&self, key: &str) -> usize {
        self.entries.iter().filter(|e| e.key == key).count()
    }
}
