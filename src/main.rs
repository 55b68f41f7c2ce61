// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the project-discovery pipeline against the GitHub API
// 3. Print the qualifying projects (table or JSON)
// 4. Exit with proper code (0 = projects found, 1 = none qualified,
//    2 = could not talk to GitHub)
//
// Rust concepts used:
// - async/await: Because we make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod github;        // src/github/ - GitHub API client and pipeline
mod readme;        // src/readme/ - README content derivation

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method
use github::{discover_projects, DiscoverConfig, GithubClient, Project};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = qualifying projects found and printed
//   Ok(1) = pipeline ran fine but nothing qualified
//   Ok(2) = the repository listing could not be fetched
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    match cli.command {
        Commands::Discover {
            username,
            token,
            exclude,
            limit,
            json,
        } => handle_discover(username, token, exclude, limit, json).await,
    }
}

// Handles the 'discover' subcommand
async fn handle_discover(
    username: String,
    token: Option<String>,
    exclude: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<i32> {
    // The --token flag wins; otherwise look for GITHUB_TOKEN
    let token = token.or_else(|| std::env::var("GITHUB_TOKEN").ok());
    if token.is_none() {
        eprintln!("Warning: no access token supplied, anonymous rate limits apply");
    }

    println!("🔍 Discovering projects for {}", username);

    let client = GithubClient::new(token)?;
    let config = DiscoverConfig {
        username,
        exclude,
        limit,
    };

    // A listing failure is the one pipeline-fatal case; per-repository
    // problems were already absorbed inside the pipeline. Keeping the two
    // apart here lets us show "something went wrong" instead of a
    // misleading "you have no projects".
    let projects = match discover_projects(&client, &config).await {
        Ok(projects) => projects,
        Err(e) => {
            eprintln!("Error: could not list repositories: {}", e);
            println!("😞 Something went wrong while talking to GitHub. Please try again.");
            return Ok(2);
        }
    };

    if projects.is_empty() {
        println!("⚠️  No qualifying projects found (a README needs an image or video to be shown)");
        return Ok(1);
    }

    print_results(&projects, json)?;
    Ok(0)
}

// Prints the results either as a table or JSON
// Parameters:
//   projects: slice of Project records
//   json: whether to output JSON format
fn print_results(projects: &[Project], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(projects)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(projects);
    }
    Ok(())
}

// Prints projects as a human-readable table in the terminal
fn print_table(projects: &[Project]) {
    println!("{:<30} {:<7} {:<30} {:<40}", "TITLE", "MEDIA", "TAGS", "LINK");
    println!("{}", "=".repeat(110));

    for project in projects {
        // Truncate title if too long for display
        let title_display = if project.title.len() > 27 {
            format!("{}...", &project.title[..27])
        } else {
            project.title.clone()
        };

        println!(
            "{:<30} {:<7} {:<30} {:<40}",
            title_display,
            format_kind(project.media_type),
            project.tags.join(", "),
            project.link
        );
        println!("   {}", project.description);
    }

    println!();
    println!("📊 {} project(s) ready for the portfolio", projects.len());
}

// Formats the media kind as a short label for the table
fn format_kind(kind: readme::MediaKind) -> &'static str {
    match kind {
        readme::MediaKind::Image => "image",
        readme::MediaKind::Video => "video",
    }
}
