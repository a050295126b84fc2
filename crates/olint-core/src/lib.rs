//! olint Core Library
//!
//! This crate decides, per HTML anchor, whether a link should open in a new
//! tab and which safe `rel` tokens must accompany it.
//!
//! # Architecture
//!
//! The policy is a pure function over one anchor's attributes and a resolved
//! [`Configuration`]. It holds no state, so a single configuration can be
//! shared by every thread rendering a page. The document rewriter walks an
//! HTML fragment with `lol_html`, applies the policy to each `<a href>` element,
//! and only touches the attributes that actually change.
//!
//! # Modules
//!
//! - `types`: Configuration, scope, rel token set and policy results
//! - `anchor`: Case-insensitive anchor attribute map
//! - `url`: Host extraction and comparison without URL allocation
//! - `policy`: The rewrite decision procedure
//! - `apply`: Applying a decision back onto an anchor
//! - `rewriter`: Scanning and rewriting an HTML document
//! - `settings`: Persisted settings model and its resolution

pub mod types;
pub mod anchor;
pub mod url;
pub mod policy;
pub mod apply;
pub mod rewriter;
pub mod settings;

// Re-export commonly used types
pub use anchor::AnchorAttributes;
pub use apply::apply;
pub use policy::{decide, is_external};
pub use rewriter::{rewrite_html, RewriteOutcome, RewriteStats, Rewriter};
pub use settings::{Settings, SettingsError};
pub use types::{Configuration, LinkScope, RelTokens, RewriteResult, TARGET_BLANK};
