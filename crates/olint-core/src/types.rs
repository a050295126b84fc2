//! Core type definitions for olint
//!
//! These types are shared by the policy, the rewriter and the settings model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The only target value the policy ever produces.
pub const TARGET_BLANK: &str = "_blank";

// =============================================================================
// Link Scope
// =============================================================================

/// Which links are eligible for rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkScope {
    /// Only links whose host differs from the site host
    #[default]
    ExternalOnly,
    /// Every navigable link, relative ones included
    AllLinks,
}

impl LinkScope {
    /// Parse from a settings or command-line string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "external_only" | "external-only" | "external" => Some(Self::ExternalOnly),
            "all_links" | "all-links" | "all" => Some(Self::AllLinks),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalOnly => "external_only",
            Self::AllLinks => "all_links",
        }
    }
}

// =============================================================================
// Rel Tokens (bit set over the safe rel tokens)
// =============================================================================

bitflags::bitflags! {
    /// Safe `rel` tokens added alongside `target="_blank"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RelTokens: u8 {
        /// Blocks `window.opener` access from the new tab
        const NOOPENER = 1 << 0;
        /// Suppresses the Referer header
        const NOREFERRER = 1 << 1;
        /// Both tokens
        const SAFE = Self::NOOPENER.bits() | Self::NOREFERRER.bits();
    }
}

impl RelTokens {
    /// Map a single rel token to its flag, ASCII case-insensitively.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("noopener") {
            Self::NOOPENER
        } else if token.eq_ignore_ascii_case("noreferrer") {
            Self::NOREFERRER
        } else {
            Self::empty()
        }
    }

    /// Collect the safe tokens present in a space-separated rel value.
    pub fn from_rel(rel: &str) -> Self {
        rel.split_ascii_whitespace()
            .fold(Self::empty(), |acc, token| acc | Self::from_token(token))
    }

    /// Token names in a stable order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(2);
        if self.contains(Self::NOOPENER) {
            out.push("noopener");
        }
        if self.contains(Self::NOREFERRER) {
            out.push("noreferrer");
        }
        out
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Fully resolved configuration for one rewrite pass.
///
/// `Default` is the conservative configuration: disabled, external links only,
/// no exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    /// Master switch, mirrors the persisted activation flag
    pub enabled: bool,
    pub scope: LinkScope,
    /// Anchors carrying any of these classes are never rewritten
    pub excluded_classes: HashSet<String>,
    /// Host used to decide whether a link is external
    pub site_host: String,
}

impl Configuration {
    /// Enabled configuration rewriting external links of `site_host`.
    pub fn new(site_host: impl Into<String>) -> Self {
        Self {
            enabled: true,
            scope: LinkScope::ExternalOnly,
            excluded_classes: HashSet::new(),
            site_host: site_host.into(),
        }
    }

    pub fn with_scope(mut self, scope: LinkScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn exclude_class(mut self, class: impl Into<String>) -> Self {
        self.excluded_classes.insert(class.into());
        self
    }
}

// =============================================================================
// Rewrite Result
// =============================================================================

/// Decision for a single anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteResult {
    /// Leave the anchor alone
    NoChange,
    /// Set `target` and add the missing rel tokens
    Mutate {
        target_value: &'static str,
        rel_additions: RelTokens,
    },
}

impl RewriteResult {
    /// Mutation adding whatever safe tokens `present` lacks.
    pub fn mutate_missing(present: RelTokens) -> Self {
        Self::Mutate {
            target_value: TARGET_BLANK,
            rel_additions: RelTokens::SAFE.difference(present),
        }
    }

    pub fn is_mutate(&self) -> bool {
        matches!(self, Self::Mutate { .. })
    }

    /// Names of the rel tokens to add (empty for `NoChange`).
    pub fn rel_addition_names(&self) -> Vec<&'static str> {
        match self {
            Self::NoChange => Vec::new(),
            Self::Mutate { rel_additions, .. } => rel_additions.names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_tokens_from_rel() {
        assert_eq!(RelTokens::from_rel(""), RelTokens::empty());
        assert_eq!(RelTokens::from_rel("nofollow"), RelTokens::empty());
        assert_eq!(RelTokens::from_rel("NoOpener nofollow"), RelTokens::NOOPENER);
        assert_eq!(RelTokens::from_rel(" noreferrer\tnoopener "), RelTokens::SAFE);
    }

    #[test]
    fn test_rel_token_names_order() {
        assert_eq!(RelTokens::SAFE.names(), vec!["noopener", "noreferrer"]);
        assert_eq!(RelTokens::NOREFERRER.names(), vec!["noreferrer"]);
        assert!(RelTokens::empty().names().is_empty());
    }

    #[test]
    fn test_mutate_missing() {
        let result = RewriteResult::mutate_missing(RelTokens::NOOPENER);
        assert_eq!(
            result,
            RewriteResult::Mutate {
                target_value: TARGET_BLANK,
                rel_additions: RelTokens::NOREFERRER,
            }
        );
        assert_eq!(result.rel_addition_names(), vec!["noreferrer"]);
        assert!(RewriteResult::NoChange.rel_addition_names().is_empty());
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!(LinkScope::parse("external_only"), Some(LinkScope::ExternalOnly));
        assert_eq!(LinkScope::parse("All-Links"), Some(LinkScope::AllLinks));
        assert_eq!(LinkScope::parse("sometimes"), None);
    }

    #[test]
    fn test_default_configuration_is_conservative() {
        let config = Configuration::default();
        assert!(!config.enabled);
        assert_eq!(config.scope, LinkScope::ExternalOnly);
        assert!(config.excluded_classes.is_empty());
    }
}
