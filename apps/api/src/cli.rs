//! Command line definitions.
//!
//! `serve` (the default) runs the HTTP API. `parse` reads a pasted résumé
//! from stdin and prints the extracted fields.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skillscan", about = "Résumé skill scanner", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve,

    /// Parse a résumé pasted on stdin (end input with an empty line)
    Parse {
        /// Required skill; repeat to build the list. Defaults to the configured vocabulary
        #[arg(short, long = "skill")]
        skills: Vec<String>,

        /// Print the parsed résumé as JSON
        #[arg(long)]
        json: bool,
    },
}
