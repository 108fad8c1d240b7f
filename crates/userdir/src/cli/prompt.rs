//! Interactive field input for the entry form.
//!
//! This is the CLI's input control: it refuses empty required fields,
//! applies the basic email pattern, keeps the current value on empty input
//! while editing, and cancels on the cancel token or end of input. It is
//! written against generic readers and writers so tests can drive it.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::form::{looks_like_email, EntryForm, Field};

/// Token that cancels the interactive form.
pub const CANCEL_TOKEN: &str = ":cancel";

/// Outcome of an interactive form walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// All fields were filled; the form is ready to submit.
    Filled,
    /// The user cancelled; the form must not be submitted.
    Cancelled,
}

/// Prompt for every field, pre-filling from the form's current values.
///
/// Used by the edit flow: each prompt shows the current value, and empty
/// input keeps it.
///
/// # Errors
///
/// Returns an error if reading input or writing prompts fails.
pub fn fill_all(
    form: &mut EntryForm,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PromptOutcome> {
    fill(form, input, output, false)
}

/// Prompt only for fields that are still empty.
///
/// Used by the add flow, where some fields may already have been supplied
/// as flags.
///
/// # Errors
///
/// Returns an error if reading input or writing prompts fails.
pub fn fill_missing(
    form: &mut EntryForm,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PromptOutcome> {
    fill(form, input, output, true)
}

fn fill(
    form: &mut EntryForm,
    input: &mut impl BufRead,
    output: &mut impl Write,
    skip_filled: bool,
) -> Result<PromptOutcome> {
    for field in Field::ALL {
        let current = match form.get(field) {
            "" => None,
            value => Some(value.to_string()),
        };
        if skip_filled && current.is_some() {
            continue;
        }

        match read_field(field, current.as_deref(), input, output)? {
            Some(value) => form.set(field, value),
            None => return Ok(PromptOutcome::Cancelled),
        }
    }
    Ok(PromptOutcome::Filled)
}

/// Prompt for a single field until an acceptable value is entered.
///
/// Returns `None` on cancellation (the cancel token or end of input).
/// Empty input keeps the current value when one is present and is refused
/// otherwise. Email values must pass the basic pattern check.
///
/// # Errors
///
/// Returns an error if reading input or writing prompts fails.
pub fn read_field(
    field: Field,
    current: Option<&str>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<String>> {
    loop {
        match current {
            Some(value) => write!(output, "{} [{value}]: ", field.label())?,
            None => write!(output, "{}: ", field.label())?,
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let entry = line.trim();

        if entry == CANCEL_TOKEN {
            return Ok(None);
        }

        if entry.is_empty() {
            if let Some(value) = current {
                return Ok(Some(value.to_string()));
            }
            writeln!(output, "{} is required.", field.label())?;
            continue;
        }

        if field == Field::Email && !looks_like_email(entry) {
            writeln!(output, "'{entry}' doesn't look like an email address.")?;
            continue;
        }

        return Ok(Some(entry.to_string()));
    }
}
