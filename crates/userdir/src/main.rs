//! `userdir` - CLI for the local user directory
//!
//! This binary provides the command-line interface for creating, editing,
//! listing, and deleting user records.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::bail;
use clap::Parser;

use userdir::cli::prompt::{self, PromptOutcome};
use userdir::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, EditCommand, ListCommand,
};
use userdir::form::{looks_like_email, EntryForm, Field};
use userdir::{init_logging, list, Config, Directory, Error};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Edit(cmd) => handle_edit(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd),
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut directory = Directory::open(config.store_path())?;

    let mut form = directory.form();
    apply_field_flags(
        &mut form,
        cmd.name.as_deref(),
        cmd.email.as_deref(),
        cmd.contact.as_deref(),
    )?;

    if !form.is_complete() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        if prompt::fill_missing(&mut form, &mut input, &mut output)? == PromptOutcome::Cancelled {
            println!("Cancelled; the directory was not changed.");
            return Ok(());
        }
    }

    let record = directory.submit(form)?;
    println!("Added user {} ({})", record.name, record.id);
    Ok(())
}

fn handle_edit(config: &Config, cmd: &EditCommand) -> anyhow::Result<()> {
    let mut directory = Directory::open(config.store_path())?;

    if directory.select_by_id(&cmd.id).is_none() {
        return Err(Error::user_not_found(cmd.id.as_str()).into());
    }
    let mut form = directory.form();

    if cmd.has_field_flags() {
        apply_field_flags(
            &mut form,
            cmd.name.as_deref(),
            cmd.email.as_deref(),
            cmd.contact.as_deref(),
        )?;
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        if prompt::fill_all(&mut form, &mut input, &mut output)? == PromptOutcome::Cancelled {
            directory.cancel();
            println!("Cancelled; the directory was not changed.");
            return Ok(());
        }
    }

    let record = directory.submit(form)?;
    println!("Updated user {} ({})", record.name, record.id);
    Ok(())
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut directory = Directory::open(config.store_path())?;

    if directory.remove(&cmd.id)? {
        println!("Deleted user {}", cmd.id);
    } else {
        println!("No user with id {}", cmd.id);
    }
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let directory = Directory::open(config.store_path())?;

    let mut stdout = io::stdout();
    list::render(directory.records(), cmd.format.into(), &mut stdout)?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Store path: {}", config.store_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

/// Apply flag-supplied field values to the form.
///
/// Flag-supplied emails go through the same basic pattern check the
/// interactive prompter applies.
fn apply_field_flags(
    form: &mut EntryForm,
    name: Option<&str>,
    email: Option<&str>,
    contact: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(name) = name {
        form.set(Field::Name, name);
    }
    if let Some(email) = email {
        if !looks_like_email(email) {
            bail!("'{email}' doesn't look like an email address");
        }
        form.set(Field::Email, email);
    }
    if let Some(contact) = contact {
        form.set(Field::Contact, contact);
    }
    Ok(())
}
