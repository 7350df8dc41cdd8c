use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "An interactive command-line contact rolodex", long_about = None)]
pub struct Cli {
    /// Seed the directory from a JSON contacts file instead of the demo data
    #[arg(long, value_name = "FILE")]
    pub contacts: Option<PathBuf>,

    /// Start with an empty directory
    #[arg(long)]
    pub empty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// One line of session input, parsed after shell-words splitting.
#[derive(Parser, Debug)]
#[command(name = "rolo", no_binary_name = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List contacts under the current filter
    #[command(alias = "ls")]
    List,

    /// Show one contact card
    #[command(alias = "v")]
    Show {
        /// Index in the current list, or a name
        selector: String,

        /// Show the editable-field view instead of the card
        #[arg(long)]
        edit: bool,
    },

    /// Add a contact from field=value pairs (name, address, tel, email, type, photo)
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// Edit a contact: selector then field=value pairs; a blank value clears the field
    #[command(alias = "e")]
    Edit {
        /// Index in the current list, or a name
        selector: String,

        #[arg(required = true, num_args = 1..)]
        fields: Vec<String>,
    },

    /// Delete a contact
    #[command(aliases = ["rm", "del"])]
    Delete {
        /// Index in the current list, or a name
        selector: String,
    },

    /// Filter the list by contact type, or "all"
    #[command(alias = "f")]
    Filter {
        value: String,
    },

    /// Show the available filter values
    #[command(alias = "types")]
    Kinds,

    /// Navigate by URL fragment, e.g. "#filter/family"
    Goto {
        fragment: String,
    },

    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}
