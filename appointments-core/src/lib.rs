//! Core types for the appointments tracker.
//!
//! This crate provides everything the CLI builds its screen on:
//! - `Appointment` entries and the ordered `AppointmentList`
//! - the `storage` key-value backends and the `store` adapter over them
//! - the `EntryForm` state machine for adding entries
//! - `AppointmentBook`, the owned container tying them together

pub mod book;
pub mod config;
pub mod entry;
pub mod error;
pub mod form;
pub mod list;
pub mod storage;
pub mod store;
pub mod view;

pub use book::AppointmentBook;
pub use entry::Appointment;
pub use error::{AppointmentsError, AppointmentsResult, ValidationError};
pub use form::{EntryForm, FormState};
pub use list::AppointmentList;
pub use view::ListItem;
