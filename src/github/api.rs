// src/github/api.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Endpoints we use:
// - GET /users/{username}/repos?sort=updated&direction=desc
//     Lists an account's repositories, most recently updated first
// - GET /repos/{owner}/{repo}/readme
//     Returns README metadata plus the content as a base64 blob
// - GET {languages_url}
//     Returns a { "Language": bytes } breakdown for one repository
//
// Authentication is optional: with a personal access token we attach a
// bearer Authorization header and get much higher rate limits; without
// one the anonymous limits apply.
//
// Rust concepts:
// - async functions: For network I/O
// - Generics + trait bounds: One get_json() for every payload shape
// - serde derive: Declarative JSON -> struct deserialization
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

// Production API root; tests substitute a local mock server
const DEFAULT_API_BASE: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent header
const USER_AGENT: &str = concat!("repo-showcase/", env!("CARGO_PKG_VERSION"));

// One repository as returned by the listing endpoint
//
// Only the fields the pipeline reads - serde ignores the rest of the
// (very large) payload
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    pub fork: bool,
    pub archived: bool,
    pub default_branch: String,
    /// Declared topics; repositories without any get an empty list
    #[serde(default)]
    pub topics: Vec<String>,
    pub description: Option<String>,
    pub html_url: String,
    pub languages_url: String,
}

// Response of the readme endpoint
//
// `content` is a base64 blob; it can be absent, which we treat as
// "this repository has no README text"
#[derive(Debug, Deserialize)]
pub struct ReadmePayload {
    pub content: Option<String>,
}

// A reusable, cloneable API client
//
// reqwest's Client is an Arc internally, so cloning this is cheap and
// every clone shares one connection pool
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a client against the real GitHub API
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE, token)
    }

    /// Creates a client against an arbitrary API root (used by tests to
    /// point at a local mock server)
    pub fn with_base_url(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Lists an account's repositories, most recently updated first
    ///
    /// The ordering matters: the pipeline preserves it all the way into
    /// the final project list
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<RawRepository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&direction=desc",
            self.base_url, username
        );
        self.get_json(&url).await
    }

    /// Fetches one repository's README metadata and base64 content
    pub async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<ReadmePayload> {
        let url = format!("{}/repos/{}/{}/readme", self.base_url, owner, repo);
        self.get_json(&url).await
    }

    /// Fetches a repository's language names, ordered by bytes of code
    /// (the order GitHub sends them in)
    pub async fn fetch_languages(&self, languages_url: &str) -> Result<Vec<String>> {
        // languages_url comes straight from the listing payload, so it's
        // already absolute - we fetch it as-is
        let breakdown: serde_json::Map<String, serde_json::Value> =
            self.get_json(languages_url).await?;
        Ok(breakdown.into_iter().map(|(name, _bytes)| name).collect())
    }

    // Issues one GET request and deserializes the JSON response
    //
    // Any non-success status becomes an error carrying the HTTP status;
    // the caller decides whether that is fatal (the listing call) or
    // just skips one repository (the enrichment calls)
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");

        // Attach the Authorization header only when we have a credential
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "GitHub API request failed for {}: HTTP {}",
                url,
                response.status()
            ));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    fn repo_fixture(server_url: &str) -> serde_json::Value {
        json!([{
            "id": 42,
            "name": "demo-project",
            "fork": false,
            "archived": false,
            "default_branch": "main",
            "topics": ["rust", "cli"],
            "description": "A demo",
            "html_url": "https://github.com/octo/demo-project",
            "languages_url": format!("{}/repos/octo/demo-project/languages", server_url),
            "stargazers_count": 7
        }])
    }

    #[tokio::test]
    async fn test_list_repositories_deserializes_payload() {
        let mut server = Server::new_async().await;
        let body = repo_fixture(&server.url()).to_string();

        let mock = server
            .mock("GET", "/users/octo/repos")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("sort".into(), "updated".into()),
                mockito::Matcher::UrlEncoded("direction".into(), "desc".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = GithubClient::with_base_url(&server.url(), None).unwrap();
        let repos = client.list_repositories("octo").await.unwrap();

        mock.assert_async().await;
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id, 42);
        assert_eq!(repos[0].name, "demo-project");
        assert_eq!(repos[0].topics, vec!["rust", "cli"]);
    }

    #[tokio::test]
    async fn test_bearer_header_attached_only_with_token() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/octo/demo/readme")
            .match_header("authorization", "Bearer s3cret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "content": "aGk=" }).to_string())
            .create_async()
            .await;

        let client =
            GithubClient::with_base_url(&server.url(), Some("s3cret".to_string())).unwrap();
        let payload = client.fetch_readme("octo", "demo").await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload.content.as_deref(), Some("aGk="));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/repos/octo/demo/readme")
            .with_status(404)
            .create_async()
            .await;

        let client = GithubClient::with_base_url(&server.url(), None).unwrap();
        let err = client.fetch_readme("octo", "demo").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_languages_preserves_source_order() {
        let mut server = Server::new_async().await;

        // Deliberately not alphabetical - the order must survive
        server
            .mock("GET", "/repos/octo/demo/languages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"TypeScript":100,"CSS":10,"Dockerfile":1}"#)
            .create_async()
            .await;

        let client = GithubClient::with_base_url(&server.url(), None).unwrap();
        let url = format!("{}/repos/octo/demo/languages", server.url());
        let languages = client.fetch_languages(&url).await.unwrap();

        assert_eq!(languages, vec!["TypeScript", "CSS", "Dockerfile"]);
    }
}
