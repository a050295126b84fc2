//! Document Rewriter
//!
//! Streams an HTML fragment through `lol_html`, applies the policy to every
//! `<a href>` element and writes back only the `target` / `rel` values that
//! change. Anchors that need nothing keep their original bytes.
//!
//! The tokenizer tracks comments, attribute values and raw text / RCDATA
//! content (`script`, `style`, `textarea`, `title` ...), so markup-looking text
//! there is never treated as an anchor.

use log::{debug, warn};
use lol_html::{element, rewrite_str, RewriteStrSettings};

use crate::anchor::AnchorAttributes;
use crate::apply::apply;
use crate::policy::decide;
use crate::types::Configuration;

/// Attributes the policy may change.
const REWRITTEN_ATTRIBUTES: [&str; 2] = ["target", "rel"];

/// Counters for one rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Anchor elements with an href
    pub anchors: usize,
    /// Anchors whose attributes were changed
    pub rewritten: usize,
    /// Anchors left as written
    pub unchanged: usize,
}

/// Result of rewriting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub html: String,
    pub stats: RewriteStats,
}

/// Applies the policy to every anchor in a document.
///
/// Borrows its configuration, so one configuration built per render can back
/// any number of rewriters on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'a> {
    config: &'a Configuration,
}

impl<'a> Rewriter<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a Configuration {
        self.config
    }

    /// Rewrite all anchors in `html`.
    ///
    /// Never fails: if the rewriter reports an error the document is returned
    /// unchanged.
    pub fn rewrite(&self, html: &str) -> RewriteOutcome {
        let config = self.config;
        let mut stats = RewriteStats::default();

        if !config.enabled {
            return RewriteOutcome {
                html: html.to_string(),
                stats,
            };
        }

        let result = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![element!("a[href]", |el| {
                    let original = AnchorAttributes::from_pairs(
                        el.attributes().iter().map(|attr| (attr.name(), attr.value())),
                    );
                    stats.anchors += 1;

                    let mut anchor = original.clone();
                    if !apply(&mut anchor, &decide(&original, config)) {
                        stats.unchanged += 1;
                        return Ok(());
                    }

                    for name in REWRITTEN_ATTRIBUTES {
                        match anchor.get(name) {
                            Some(value) if original.get(name) != Some(value) => {
                                el.set_attribute(name, value)?;
                            }
                            _ => {}
                        }
                    }
                    stats.rewritten += 1;
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        );

        match result {
            Ok(out) => {
                debug!(
                    "rewrote {} of {} anchors ({} unchanged)",
                    stats.rewritten, stats.anchors, stats.unchanged
                );
                RewriteOutcome { html: out, stats }
            }
            Err(e) => {
                warn!("failed to rewrite document, leaving it unchanged: {e}");
                RewriteOutcome {
                    html: html.to_string(),
                    stats: RewriteStats::default(),
                }
            }
        }
    }
}

/// Rewrite all anchors in `html` with `config`.
pub fn rewrite_html(html: &str, config: &Configuration) -> RewriteOutcome {
    Rewriter::new(config).rewrite(html)
}
