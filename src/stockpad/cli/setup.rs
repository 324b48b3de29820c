use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpad", bin_name = "stockpad", version)]
#[command(about = "Keep a small product inventory in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all records
    #[command(alias = "ls")]
    List,

    /// Search records by name (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Text to look for in record names
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Add a record
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// Quantity (whole number)
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Price (e.g. 5.50)
        #[arg(allow_hyphen_values = true)]
        price: String,
    },

    /// Edit a record; fields not given keep their value
    #[command(alias = "e")]
    Edit {
        /// Index of the record (e.g. 2)
        index: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long, allow_hyphen_values = true)]
        qty: Option<String>,

        /// New price
        #[arg(short, long, allow_hyphen_values = true)]
        price: Option<String>,
    },

    /// Show one or more records in full
    #[command(alias = "v")]
    View {
        /// Indexes of the records (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the records (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the path of the inventory file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, currency, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
