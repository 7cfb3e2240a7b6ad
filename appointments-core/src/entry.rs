//! A single appointment entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One appointment: the date as the user typed it, plus what is happening.
///
/// `key` doubles as the identifier used for deletion. It is never parsed as a
/// calendar date, so "10/10" and "tomorrow" are both valid keys, and two
/// entries may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub key: String,
    pub item: String,
}

impl Appointment {
    pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
        Appointment {
            key: date.into(),
            item: description.into(),
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.key, self.item)
    }
}
