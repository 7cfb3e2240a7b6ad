//! Terminal rendering for appointments-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use appointments_core::{AppointmentList, ListItem};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ListItem<'_> {
    fn render(&self) -> String {
        let mut lines = self.description().lines();
        let first = lines.next().unwrap_or_default();

        let mut out = format!("{}  {}", self.date().cyan().bold(), first);
        // Continuation lines of a multi-line description line up under the first
        let indent = " ".repeat(self.date().chars().count() + 2);
        for line in lines {
            out.push('\n');
            out.push_str(&indent);
            out.push_str(line);
        }
        out
    }
}

pub fn render_title(title: &str) -> String {
    format!("  {}", title.bold())
}

/// Numbered rows for the whole list, or `empty_hint` when there is nothing.
pub fn render_list(list: &AppointmentList, empty_hint: &str) -> String {
    if list.is_empty() {
        return format!("   {}", empty_hint.dimmed());
    }

    let width = list.len().to_string().len();

    ListItem::all(list)
        .enumerate()
        .map(|(i, item)| {
            let number = format!("{:>width$}.", i + 1);
            let body = item.render().replace('\n', &format!("\n   {}", " ".repeat(width + 2)));
            format!("   {} {}", number.dimmed(), body)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
