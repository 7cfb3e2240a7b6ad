//! Per-entry projection used when drawing the list.

use crate::entry::Appointment;
use crate::list::AppointmentList;

/// One row of the list: the entry's fields plus its delete control.
#[derive(Debug, Clone, Copy)]
pub struct ListItem<'a> {
    entry: &'a Appointment,
}

impl<'a> ListItem<'a> {
    pub fn new(entry: &'a Appointment) -> Self {
        ListItem { entry }
    }

    /// Rows for every entry, in display order.
    pub fn all(list: &'a AppointmentList) -> impl Iterator<Item = ListItem<'a>> + 'a {
        list.entries().iter().map(ListItem::new)
    }

    pub fn date(&self) -> &'a str {
        &self.entry.key
    }

    pub fn description(&self) -> &'a str {
        &self.entry.item
    }

    /// The entry handed back to the list when this row's delete is pressed.
    pub fn delete_target(&self) -> Appointment {
        self.entry.clone()
    }
}
