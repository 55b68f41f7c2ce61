// src/github/mod.rs
// =============================================================================
// This module handles everything GitHub-specific.
//
// Submodules:
// - api: Typed client for the GitHub REST endpoints we need
// - discover: The pipeline that turns an account's repositories into
//   showcase-ready project records
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod api;
mod discover;

// Re-export the public surface from the submodules
pub use api::GithubClient;
pub use discover::{discover_projects, DiscoverConfig, Project};
