//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::list::ListFormat;

/// Add command arguments.
///
/// Fields not supplied as flags are prompted for interactively.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The user's name
    #[arg(short, long)]
    pub name: Option<String>,

    /// The user's email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// The user's contact number
    #[arg(short, long)]
    pub contact: Option<String>,
}

/// Edit command arguments.
///
/// With field flags the edit is applied directly, keeping unflagged fields
/// unchanged. Without flags an interactive form walks all fields, showing
/// the current values.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Identifier of the user to edit
    pub id: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// New contact number
    #[arg(short, long)]
    pub contact: Option<String>,
}

impl EditCommand {
    /// Check if any field flag was supplied (non-interactive edit).
    #[must_use]
    pub fn has_field_flags(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.contact.is_some()
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Identifier of the user to delete
    pub id: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for ListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(ListFormat::from(OutputFormat::Plain), ListFormat::Plain);
        assert_eq!(ListFormat::from(OutputFormat::Table), ListFormat::Table);
        assert_eq!(ListFormat::from(OutputFormat::Json), ListFormat::Json);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_edit_command_field_flags() {
        let cmd = EditCommand {
            id: "abc".to_string(),
            name: None,
            email: None,
            contact: None,
        };
        assert!(!cmd.has_field_flags());

        let cmd = EditCommand {
            id: "abc".to_string(),
            name: None,
            email: Some("new@example.com".to_string()),
            contact: None,
        };
        assert!(cmd.has_field_flags());
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            name: Some("Ada".to_string()),
            email: None,
            contact: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Ada"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
