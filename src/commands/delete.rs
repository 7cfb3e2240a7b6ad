use anyhow::{Result, bail};
use appointments_core::storage::KeyValueStorage;
use appointments_core::{Appointment, AppointmentBook, ListItem};
use owo_colors::OwoColorize;

use crate::utils::prompt;

pub async fn run<S: KeyValueStorage>(
    book: &mut AppointmentBook<S>,
    index: usize,
    yes: bool,
) -> Result<()> {
    let Some(entry) = index.checked_sub(1).and_then(|i| book.list().get(i)) else {
        bail!(
            "No appointment at position {}. There are {} appointments.",
            index,
            book.list().len()
        );
    };

    let target = ListItem::new(entry).delete_target();
    let sharing = book.list().count_with_key(&target.key);

    if !yes {
        let question =
            shared_date_warning(&target, sharing).unwrap_or_else(|| format!("  Delete '{}'?", target));
        if !prompt::confirm(&question)? {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    let removed = book.delete(&target).await;
    println!("{}", deleted_message(&target.key, removed).red());

    Ok(())
}

/// Confirmation text when deleting `target` would also take other entries
/// on the same date.
pub fn shared_date_warning(target: &Appointment, sharing: usize) -> Option<String> {
    (sharing > 1).then(|| {
        format!(
            "  Delete '{}'? All {} appointments on {} will be removed",
            target, sharing, target.key
        )
    })
}

pub fn deleted_message(date: &str, removed: usize) -> String {
    if removed == 1 {
        format!("  Deleted appointment on {}", date)
    } else {
        format!("  Deleted {} appointments on {}", removed, date)
    }
}
