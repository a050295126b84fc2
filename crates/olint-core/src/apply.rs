//! Applying a rewrite decision to an anchor.

use crate::anchor::AnchorAttributes;
use crate::types::RewriteResult;

/// Apply `result` to `anchor`.
///
/// Sets `target` and appends the missing rel tokens after the existing ones;
/// no existing token is ever removed. Returns `true` if any attribute value
/// changed.
pub fn apply(anchor: &mut AnchorAttributes, result: &RewriteResult) -> bool {
    let (target_value, rel_additions) = match result {
        RewriteResult::NoChange => return false,
        RewriteResult::Mutate {
            target_value,
            rel_additions,
        } => (*target_value, *rel_additions),
    };

    let mut changed = false;

    if anchor.target() != Some(target_value) {
        anchor.set("target", target_value);
        changed = true;
    }

    if !rel_additions.is_empty() {
        let existing = anchor.rel().unwrap_or("").trim();
        let additions = rel_additions.names().join(" ");
        let rel = if existing.is_empty() {
            additions
        } else {
            format!("{existing} {additions}")
        };
        anchor.set("rel", rel);
        changed = true;
    }

    changed
}
