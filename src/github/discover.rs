// src/github/discover.rs
// =============================================================================
// This module builds the portfolio project list from an account's repos.
//
// Per repository:
// 1. Pre-exclude forks, archived repos, and the portfolio repo itself
// 2. Fetch README content and language breakdown concurrently
// 3. Decode the README and look for its first image/video reference -
//    a repository with nothing to show is not shown (curation policy)
// 4. Absolutize the media URL against the repo's default branch
// 5. Derive description (first paragraph > repo description > placeholder),
//    tags (topics > language names, max 5) and a human-readable title
//
// Across repositories everything runs concurrently, but the output keeps
// the listing order: GitHub sends repos most-recently-updated first and
// that is the order the portfolio slider shows them in.
//
// A single repository failing (README fetch error, bad payload) only
// removes that repository from the result - it never aborts the run.
//
// Rust concepts:
// - join_all: Await many futures at once, results in input order
// - tokio::try_join!: Await two futures, fail fast if either fails
// - Option<Project>: "qualified" vs "excluded" per repository
// =============================================================================

use anyhow::Result;
use futures::future::join_all;
use serde::Serialize;

use super::api::{GithubClient, RawRepository};
use crate::readme;

// Description used when neither the README nor the repo metadata has any
// prose. Records that still carry it at the end are filtered out, so it
// never reaches the final output.
pub const NO_DESCRIPTION: &str = "No description.";

// Most tags shown per project card
const MAX_TAGS: usize = 5;

// Everything the pipeline needs to know about one run
//
// Passed in explicitly (no globals): the caller decides which account to
// scan and which repository name to hide from its own portfolio
#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Account handle whose repositories are listed
    pub username: String,
    /// Repository name to exclude, compared case-insensitively
    /// (typically the portfolio site's own repo)
    pub exclude: Option<String>,
    /// Cap on the number of emitted records; None = all
    pub limit: Option<usize>,
}

// One displayable project, ready for the presentation layer
//
// Serializes with camelCase keys (mediaUrl, mediaType) - the shape the
// portfolio frontend consumes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable id: the repository's numeric id as a string
    pub id: String,
    /// Repository name with '-' and '_' turned into spaces
    pub title: String,
    /// Plain-text summary, at most 150 characters plus an ellipsis
    pub description: String,
    /// Absolute URL of the hero image or video
    pub media_url: String,
    pub media_type: readme::MediaKind,
    /// The repository's web page
    pub link: String,
    /// Topics, or detected languages when no topics are declared (max 5)
    pub tags: Vec<String>,
}

// Discovers all showcase-ready projects for an account
//
// Returns Err only when the listing call itself fails; per-repository
// problems are logged and swallowed. An Ok(empty vec) therefore really
// means "no repository qualified", which the caller can present
// differently from a failed run.
pub async fn discover_projects(
    client: &GithubClient,
    config: &DiscoverConfig,
) -> Result<Vec<Project>> {
    let repos = client.list_repositories(&config.username).await?;
    println!("📄 Found {} repositories for {}", repos.len(), config.username);

    // Fan out assembly for every repository that survives pre-exclusion.
    // join_all keeps results in input order no matter which network call
    // finishes first, so the listing order is preserved for free.
    let tasks = repos
        .into_iter()
        .filter(|repo| !pre_excluded(repo, config))
        .map(|repo| assemble_project(client, &config.username, repo));

    let assembled = join_all(tasks).await;

    // Final admission gate: drop exclusions (None), placeholder-only
    // descriptions, and anything without a usable media URL
    let mut projects: Vec<Project> = assembled
        .into_iter()
        .flatten()
        .filter(|p| p.description != NO_DESCRIPTION && !p.media_url.is_empty())
        .collect();

    if let Some(limit) = config.limit {
        projects.truncate(limit);
    }

    println!("✅ {} project(s) qualified for display", projects.len());
    Ok(projects)
}

// Cheap metadata-only exclusions, applied before any per-repo fetching
fn pre_excluded(repo: &RawRepository, config: &DiscoverConfig) -> bool {
    if repo.fork || repo.archived {
        return true;
    }
    match &config.exclude {
        Some(name) => repo.name.eq_ignore_ascii_case(name),
        None => false,
    }
}

// Processes one repository into Some(Project), or None if it is excluded
//
// Takes the repository by value: this task is its sole owner for the
// duration of the processing and nothing is shared between tasks.
async fn assemble_project(
    client: &GithubClient,
    username: &str,
    repo: RawRepository,
) -> Option<Project> {
    // README and language breakdown are independent - fetch both at once.
    // If either fails, this repository is skipped; the others carry on.
    let enriched = tokio::try_join!(
        client.fetch_readme(username, &repo.name),
        client.fetch_languages(&repo.languages_url),
    );
    let (readme_payload, languages) = match enriched {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Warning: skipping {}: {}", repo.name, e);
            return None;
        }
    };

    // A repository can exist without a README; that's just empty text
    let readme_text = readme_payload
        .content
        .as_deref()
        .map(readme::decode_base64_text)
        .unwrap_or_default();

    // Hard requirement: no hero media, no project card
    let media = match readme::first_media(&readme_text) {
        Some(media) => media,
        None => {
            println!("   Skipping {}: no media in README", repo.name);
            return None;
        }
    };

    let media_url = readme::absolutize(&media.url, username, &repo.name, &repo.default_branch);

    // Description preference: README first paragraph, then the repo's
    // declared description, then the placeholder (filtered out later).
    // Whatever wins goes through the same sanitizer.
    let paragraph = readme::first_paragraph(&readme_text);
    let raw_description = if !paragraph.trim().is_empty() {
        paragraph
    } else {
        repo.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    };
    let description = readme::clean(&raw_description);

    // Tags: declared topics win; otherwise the detected languages
    let mut tags = if repo.topics.is_empty() {
        languages
    } else {
        repo.topics.clone()
    };
    tags.truncate(MAX_TAGS);

    Some(Project {
        id: repo.id.to_string(),
        title: repo.name.replace(['-', '_'], " "),
        description,
        media_url,
        media_type: media.kind,
        link: repo.html_url,
        tags,
    })
}
