//! Link Rewrite Policy
//!
//! Decides, for one anchor, whether it should open in a new tab. The decision
//! is a pure function of the anchor and the configuration: no
//! shared state, no I/O, and it never fails.

use log::trace;

use crate::anchor::AnchorAttributes;
use crate::types::{Configuration, LinkScope, RelTokens, RewriteResult};
use crate::url::{extract_host, hosts_match, is_non_navigable};

/// Decide how to rewrite one anchor.
///
/// Order of checks:
/// 1. disabled configuration
/// 2. missing or non-navigable href
/// 3. excluded class
/// 4. scope / externality
pub fn decide(anchor: &AnchorAttributes, config: &Configuration) -> RewriteResult {
    if !config.enabled {
        return RewriteResult::NoChange;
    }

    let href = match anchor.href() {
        Some(href) if !is_non_navigable(href) => href,
        _ => {
            trace!("skip anchor: no navigable href ({:?})", anchor.href());
            return RewriteResult::NoChange;
        }
    };

    if let Some(class) = anchor.classes().find(|c| config.excluded_classes.contains(*c)) {
        trace!("skip {href}: excluded class '{class}'");
        return RewriteResult::NoChange;
    }

    if config.scope == LinkScope::ExternalOnly && !is_external(href, config) {
        trace!("skip {href}: internal link");
        return RewriteResult::NoChange;
    }

    let present = RelTokens::from_rel(anchor.rel().unwrap_or(""));
    let result = RewriteResult::mutate_missing(present);
    trace!("rewrite {href}: add rel {:?}", result.rel_addition_names());
    result
}

/// Check whether an href points off-site.
///
/// Relative and malformed hrefs are internal. An empty site host makes every
/// link external.
pub fn is_external(href: &str, config: &Configuration) -> bool {
    if config.site_host.trim().is_empty() {
        return true;
    }
    match extract_host(href) {
        Some(host) => !hosts_match(host, &config.site_host),
        None => false,
    }
}
