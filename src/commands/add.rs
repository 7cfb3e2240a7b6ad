use anyhow::Result;
use appointments_core::AppointmentBook;
use appointments_core::storage::KeyValueStorage;
use owo_colors::OwoColorize;

use crate::utils::prompt;

pub async fn run<S: KeyValueStorage>(
    book: &mut AppointmentBook<S>,
    date: Option<String>,
    item: Option<String>,
) -> Result<()> {
    let interactive = date.is_none() || item.is_none();

    let date = match date {
        Some(d) => d,
        None => prompt::text("  Date", "")?,
    };
    let item = match item {
        Some(i) => i,
        None => prompt::text("  Description", "")?,
    };

    let added = submit(book, date, item).await?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", added).green());

    Ok(())
}

/// Fill the entry form and submit it.
async fn submit<S: KeyValueStorage>(
    book: &mut AppointmentBook<S>,
    date: String,
    item: String,
) -> Result<appointments_core::Appointment> {
    let form = book.form_mut();
    form.open();
    form.set_date(date);
    form.set_item(item);

    Ok(book.submit_form().await?)
}
