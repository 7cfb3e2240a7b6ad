use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

/// Ask for free text, pre-filled with `current`. Empty answers are allowed;
/// checking them is the form's job.
pub fn text(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Show a message that must be acknowledged before continuing.
pub fn alert(message: &str) -> Result<()> {
    eprintln!("  {}", message.red());
    Select::new().items(&["OK"]).default(0).interact()?;
    Ok(())
}

pub fn confirm(prompt: &str) -> Result<bool> {
    let answer = Confirm::new().with_prompt(prompt).default(false).interact()?;
    Ok(answer)
}
