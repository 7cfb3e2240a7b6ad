//! The owned state behind the appointments screen.

use tracing::debug;

use crate::entry::Appointment;
use crate::error::ValidationError;
use crate::form::EntryForm;
use crate::list::AppointmentList;
use crate::storage::KeyValueStorage;
use crate::store::AppointmentStore;

/// Ties the list, the entry form and persistence together.
///
/// Every mutation goes through `&mut self` and is followed by `persist`, so
/// saves are issued one at a time in mutation order.
pub struct AppointmentBook<S> {
    store: AppointmentStore<S>,
    list: AppointmentList,
    form: EntryForm,
}

impl<S: KeyValueStorage> AppointmentBook<S> {
    /// Load the stored collection. Nothing is written back.
    pub async fn open(store: AppointmentStore<S>) -> Self {
        let list = AppointmentList::from_loaded(store.load().await);
        AppointmentBook {
            store,
            list,
            form: EntryForm::new(),
        }
    }

    pub fn list(&self) -> &AppointmentList {
        &self.list
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn store(&self) -> &AppointmentStore<S> {
        &self.store
    }

    /// Submit the entry form, saving the collection if an entry was added.
    pub async fn submit_form(&mut self) -> Result<Appointment, ValidationError> {
        let added = self.form.submit(&mut self.list)?;
        self.persist().await;
        Ok(added)
    }

    /// Delete `entry` (and anything sharing its date), then save.
    pub async fn delete(&mut self, entry: &Appointment) -> usize {
        let removed = self.list.remove(entry);
        self.persist().await;
        removed
    }

    /// Save the collection if it changed since the last successful save.
    /// A failed save leaves the list dirty so the next change retries it.
    pub async fn persist(&mut self) {
        if !self.list.is_dirty() {
            debug!("Appointments unchanged, skipping save");
            return;
        }
        if self.store.save(self.list.entries()).await {
            self.list.mark_clean();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use crate::store::DEFAULT_STORAGE_KEY;

    async fn empty_book() -> AppointmentBook<MemoryStorage> {
        AppointmentBook::open(AppointmentStore::new(MemoryStorage::new())).await
    }

    async fn add<S: KeyValueStorage>(book: &mut AppointmentBook<S>, date: &str, item: &str) {
        book.form_mut().open();
        book.form_mut().set_date(date);
        book.form_mut().set_item(item);
        book.submit_form().await.unwrap();
    }

    #[tokio::test]
    async fn test_open_without_data_is_empty_and_writes_nothing() {
        let book = empty_book().await;
        assert!(book.list().is_empty());
        assert_eq!(book.store().storage().peek(DEFAULT_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_open_does_not_rewrite_record() {
        // Deliberately non-canonical spacing: a rewrite would normalize it
        let raw = r#"[ {"key": "10/10", "item": "Dentist"} ]"#;
        let store = AppointmentStore::new(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, raw));

        let book = AppointmentBook::open(store).await;

        assert_eq!(book.list().len(), 1);
        assert_eq!(book.store().storage().peek(DEFAULT_STORAGE_KEY).as_deref(), Some(raw));
    }

    #[tokio::test]
    async fn test_submit_form_persists() {
        let mut book = empty_book().await;

        book.form_mut().open();
        book.form_mut().set_date("10/10");
        book.form_mut().set_item("Dentist");
        book.submit_form().await.unwrap();

        assert_eq!(book.list().entries(), &[Appointment::new("10/10", "Dentist")]);
        assert!(!book.form().is_open());
        assert_eq!(book.form().date(), "");
        assert_eq!(book.form().item(), "");
        assert_eq!(
            book.store().storage().peek(DEFAULT_STORAGE_KEY).as_deref(),
            Some(r#"[{"key":"10/10","item":"Dentist"}]"#)
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_changes_nothing() {
        let mut book = empty_book().await;

        book.form_mut().open();
        book.form_mut().set_item("Dentist");

        assert_eq!(book.submit_form().await, Err(ValidationError::EmptyFields));
        assert!(book.form().is_open());
        assert!(book.list().is_empty());
        assert_eq!(book.store().storage().peek(DEFAULT_STORAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_delete_persists_remaining() {
        let mut book = empty_book().await;
        add(&mut book, "2024-01-01", "Checkup").await;
        add(&mut book, "2024-02-02", "Haircut").await;

        let removed = book.delete(&Appointment::new("2024-01-01", "Checkup")).await;

        assert_eq!(removed, 1);
        let reloaded = book.store().load().await;
        assert_eq!(reloaded, vec![Appointment::new("2024-02-02", "Haircut")]);
    }

    #[tokio::test]
    async fn test_failed_save_retried_on_next_change() {
        let mut book = empty_book().await;
        book.store().storage().set_fail_writes(true);

        add(&mut book, "2024-01-01", "Checkup").await;
        assert!(book.list().is_dirty());
        assert_eq!(book.store().storage().peek(DEFAULT_STORAGE_KEY), None);

        book.store().storage().set_fail_writes(false);
        add(&mut book, "2024-02-02", "Haircut").await;

        assert!(!book.list().is_dirty());
        assert_eq!(book.store().load().await.len(), 2);
    }

    #[tokio::test]
    async fn test_reopen_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let mut book = AppointmentBook::open(AppointmentStore::new(FileStorage::new(dir.path()))).await;
        add(&mut book, "10/10", "Dentist").await;
        add(&mut book, "11/10", "Gym").await;
        drop(book);

        let book = AppointmentBook::open(AppointmentStore::new(FileStorage::new(dir.path()))).await;
        assert_eq!(
            book.list().entries(),
            &[Appointment::new("10/10", "Dentist"), Appointment::new("11/10", "Gym")]
        );
    }
}
