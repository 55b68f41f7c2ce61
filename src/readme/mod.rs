// src/readme/mod.rs
// =============================================================================
// This module derives display content from a repository's README.
//
// Submodules:
// - decode: Turns the API's base64-encoded README blob into UTF-8 text
// - markdown: Finds the first paragraph and the first image/video reference
// - sanitize: Strips inline markdown and truncates descriptions
// - url: Rewrites relative media paths into absolute raw-content URLs
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod decode;
mod markdown;
mod sanitize;
mod url;

// Re-export public items from submodules
// This lets users write `readme::first_media()` instead of
// `readme::markdown::first_media()`
pub use decode::decode_base64_text;
pub use markdown::{first_media, first_paragraph, Media, MediaKind};
pub use sanitize::clean;
pub use url::absolutize;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mod.rs?
//    - When you have a directory as a module (like src/readme/), the
//      mod.rs file inside it is the module root
//    - It's like index.js in JavaScript or __init__.py in Python
//
// 2. Why use 'pub use'?
//    - It re-exports items from submodules
//    - Makes the API cleaner for users of this module
//    - They don't need to know about our internal organization
//
// 3. Module privacy:
//    - By default, modules are private
//    - We explicitly choose what to make public with 'pub'
//    - This gives us control over our API surface
// -----------------------------------------------------------------------------
