// src/readme/url.rs
// =============================================================================
// This module rewrites media paths found in a README into absolute URLs.
//
// README authors usually reference screenshots relative to the repository
// root ("./assets/shot.png" or "/assets/shot.png"). A browser can't fetch
// those from a portfolio page, so we point them at GitHub's raw-content
// host, which serves file contents for any repo/branch/path.
//
// Rust concepts:
// - &str methods: starts_with, strip_prefix for cheap prefix handling
// - format!: Building the final URL string
// =============================================================================

// Host that serves raw file contents for public repositories
const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

// Converts a possibly-relative media path into an absolute URL
//
// Parameters:
//   url: the path exactly as written in the README
//   owner: account handle that owns the repository
//   repo: repository name
//   branch: the repository's default branch
//
// Already-absolute URLs pass through unchanged.
//
// Example:
//   absolutize("./img/shot.png", "A", "R", "main")
//     -> "https://raw.githubusercontent.com/A/R/main/img/shot.png"
pub fn absolutize(url: &str, owner: &str, repo: &str, branch: &str) -> String {
    if url.starts_with("http") {
        return url.to_string();
    }

    // "./assets/x.png" and "assets/x.png" mean the same place
    let path = url.strip_prefix("./").unwrap_or(url);

    if path.starts_with('/') {
        // Root-relative: the path brings its own separator
        format!("https://{}/{}/{}/{}{}", RAW_CONTENT_HOST, owner, repo, branch, path)
    } else {
        format!("https://{}/{}/{}/{}/{}", RAW_CONTENT_HOST, owner, repo, branch, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_unchanged() {
        let url = "https://example.com/demo.gif";
        assert_eq!(absolutize(url, "A", "R", "main"), url);
    }

    #[test]
    fn test_dot_slash_relative_path() {
        assert_eq!(
            absolutize("./img/shot.png", "A", "R", "main"),
            "https://raw.githubusercontent.com/A/R/main/img/shot.png"
        );
    }

    #[test]
    fn test_root_relative_path_no_double_slash() {
        assert_eq!(
            absolutize("/img/shot.png", "A", "R", "main"),
            "https://raw.githubusercontent.com/A/R/main/img/shot.png"
        );
    }

    #[test]
    fn test_bare_relative_path() {
        assert_eq!(
            absolutize("assets/demo.mp4", "octocat", "hello", "master"),
            "https://raw.githubusercontent.com/octocat/hello/master/assets/demo.mp4"
        );
    }
}
