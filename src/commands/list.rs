use anyhow::Result;
use appointments_core::AppointmentBook;
use appointments_core::config::AppConfig;
use appointments_core::storage::KeyValueStorage;

use crate::render::{render_list, render_title};

pub fn run<S: KeyValueStorage>(config: &AppConfig, book: &AppointmentBook<S>) -> Result<()> {
    println!("{}", render_title(&config.title));
    println!();
    println!(
        "{}",
        render_list(book.list(), "No appointments yet. Add one with `appointments add`.")
    );

    Ok(())
}
