// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-showcase",
    version = "0.1.0",
    about = "Turn a GitHub account's repositories into showcase-ready portfolio entries",
    long_about = "repo-showcase lists an account's repositories, reads each README for a \
                  representative image or video and a short description, and emits the \
                  qualifying projects in the shape a portfolio page consumes."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover showcase-ready projects for a GitHub account
    ///
    /// Example: repo-showcase discover octocat --exclude my-portfolio
    Discover {
        /// GitHub account handle whose repositories are listed
        ///
        /// This is a positional argument (required, no flag needed)
        username: String,

        /// Personal access token for higher API rate limits
        ///
        /// Falls back to the GITHUB_TOKEN environment variable;
        /// without either, anonymous rate limits apply
        #[arg(long)]
        token: Option<String>,

        /// Repository name to hide from the results
        ///
        /// Matched case-insensitively; typically the portfolio
        /// site's own repository
        #[arg(long)]
        exclude: Option<String>,

        /// Emit at most this many projects
        #[arg(long)]
        limit: Option<usize>,

        /// Output results in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },
}
