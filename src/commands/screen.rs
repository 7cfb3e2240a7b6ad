//! The interactive screen: title, list, and actions to add or delete.

use anyhow::Result;
use appointments_core::config::AppConfig;
use appointments_core::storage::KeyValueStorage;
use appointments_core::{AppointmentBook, ListItem};
use dialoguer::Select;
use owo_colors::OwoColorize;

use super::delete::{deleted_message, shared_date_warning};
use crate::render::{Render, render_list, render_title};
use crate::utils::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenAction {
    Add,
    Delete,
    Quit,
}

impl ScreenAction {
    fn label(self) -> &'static str {
        match self {
            ScreenAction::Add => "+ Add appointment",
            ScreenAction::Delete => "- Delete appointment",
            ScreenAction::Quit => "Quit",
        }
    }
}

/// Delete only makes sense with something to delete.
fn screen_actions(has_entries: bool) -> Vec<ScreenAction> {
    if has_entries {
        vec![ScreenAction::Add, ScreenAction::Delete, ScreenAction::Quit]
    } else {
        vec![ScreenAction::Add, ScreenAction::Quit]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    EditDate,
    EditDescription,
    Save,
    Back,
}

const FORM_ACTIONS: [FormAction; 4] = [
    FormAction::EditDate,
    FormAction::EditDescription,
    FormAction::Save,
    FormAction::Back,
];

pub async fn run<S: KeyValueStorage>(config: &AppConfig, book: &mut AppointmentBook<S>) -> Result<()> {
    loop {
        println!();
        println!("{}", render_title(&config.title));
        println!();
        println!("{}", render_list(book.list(), "No appointments yet"));
        println!();

        let actions = screen_actions(!book.list().is_empty());
        let labels: Vec<_> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new().items(&labels).default(0).interact_opt()?;

        match choice.map(|i| actions[i]) {
            Some(ScreenAction::Add) => entry_form(book).await?,
            Some(ScreenAction::Delete) => pick_and_delete(book).await?,
            Some(ScreenAction::Quit) | None => return Ok(()),
        }
    }
}

/// Run the entry form until it is saved or dismissed.
async fn entry_form<S: KeyValueStorage>(book: &mut AppointmentBook<S>) -> Result<()> {
    book.form_mut().open();

    while book.form().is_open() {
        let labels = form_labels(book.form().date(), book.form().item());
        let choice = Select::new()
            .with_prompt("  New appointment")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match choice.map(|i| FORM_ACTIONS[i]) {
            Some(FormAction::EditDate) => {
                let text = prompt::text("  Date", book.form().date())?;
                book.form_mut().set_date(text);
            }
            Some(FormAction::EditDescription) => {
                let text = prompt::text("  Description", book.form().item())?;
                book.form_mut().set_item(text);
            }
            Some(FormAction::Save) => save_draft(book, prompt::alert).await?,
            Some(FormAction::Back) | None => book.form_mut().back(),
        }
    }

    Ok(())
}

/// Submit the draft; a rejected draft is reported through `alert` and the
/// form stays open.
async fn save_draft<S, A>(book: &mut AppointmentBook<S>, alert: A) -> Result<()>
where
    S: KeyValueStorage,
    A: FnOnce(&str) -> Result<()>,
{
    match book.submit_form().await {
        Ok(added) => println!("{}", format!("  Created: {}", added).green()),
        Err(e) => alert(&e.to_string())?,
    }
    Ok(())
}

fn form_labels(date: &str, item: &str) -> Vec<String> {
    FORM_ACTIONS
        .iter()
        .map(|action| match action {
            FormAction::EditDate => format!("Date: {}", date),
            FormAction::EditDescription => format!("Description: {}", item.replace('\n', " ")),
            FormAction::Save => "Save".to_string(),
            FormAction::Back => "Back".to_string(),
        })
        .collect()
}

async fn pick_and_delete<S: KeyValueStorage>(book: &mut AppointmentBook<S>) -> Result<()> {
    let mut labels: Vec<String> = ListItem::all(book.list())
        .map(|item| item.render().replace('\n', " "))
        .collect();
    labels.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("  Delete which appointment?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    match choice {
        Some(index) => delete_row(book, index, prompt::confirm).await,
        None => Ok(()),
    }
}

/// Delete the row at `index`. When other entries share its date, `confirm`
/// decides whether they all go. Out-of-range rows (the Back item) do nothing.
async fn delete_row<S, C>(book: &mut AppointmentBook<S>, index: usize, confirm: C) -> Result<()>
where
    S: KeyValueStorage,
    C: FnOnce(&str) -> Result<bool>,
{
    let Some(target) = book.list().get(index).map(|e| ListItem::new(e).delete_target()) else {
        return Ok(());
    };

    let sharing = book.list().count_with_key(&target.key);
    if let Some(question) = shared_date_warning(&target, sharing) {
        if !confirm(&question)? {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    let removed = book.delete(&target).await;
    println!("{}", deleted_message(&target.key, removed).red());

    Ok(())
}
