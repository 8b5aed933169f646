//! Inline cross-reference resolution in summary text.
//!
//! Summaries may embed reference elements such as `<see cref="T:Ns.C"/>`
//! or `<seealso cref="M:Ns.C.Spin(System.Int32)">spin</seealso>`. Each
//! one is resolved through the member identifier parser against the same
//! [`SymbolTree`](crate::model::SymbolTree) and replaced by the
//! referenced node's qualified display name. Resolution may extend the
//! tree: a reference to a member not yet visited in document order
//! creates the missing ancestor chain on demand. References that fail to
//! resolve keep their original markup.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::ident;
use crate::model::SymbolTree;

/// Opening or self-closing inline element; captures the tag name, the
/// raw attribute text, and the self-closing slash.
static INLINE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([A-Za-z][A-Za-z0-9:._-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#).unwrap()
});

/// `cref` attribute inside a matched element's attribute text.
static CREF_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bcref\s*=\s*"([^"]*)""#).unwrap());

/// Replace every inline `cref` element in `summary` with the qualified
/// name of the node it references, creating referenced nodes on demand.
/// Elements that fail to resolve, and elements without a `cref`
/// attribute, are left exactly as written.
pub fn resolve_summary(tree: &mut SymbolTree, summary: &str) -> String {
    let mut output = String::with_capacity(summary.len());
    let mut rest = summary;

    // Each iteration consumes at least the matched start tag, so the
    // loop terminates.
    while let Some(caps) = INLINE_TAG.captures(rest) {
        let whole = caps.get(0).unwrap();
        let tag_name = caps.get(1).unwrap().as_str();
        let attrs = caps.get(2).unwrap().as_str();
        let self_closing = !caps.get(3).unwrap().as_str().is_empty();

        // Span of the complete element: the tag itself, or through the
        // nearest matching end tag for a start/end pair.
        let span_end = if self_closing {
            Some(whole.end())
        } else {
            let close = format!("</{tag_name}>");
            rest[whole.end()..]
                .find(&close)
                .map(|pos| whole.end() + pos + close.len())
        };

        let Some(span_end) = span_end else {
            // Unterminated start tag: not a complete element. Emit it
            // verbatim and move on.
            output.push_str(&rest[..whole.end()]);
            rest = &rest[whole.end()..];
            continue;
        };

        output.push_str(&rest[..whole.start()]);
        let element = &rest[whole.start()..span_end];

        match CREF_ATTR.captures(attrs) {
            Some(cref) => {
                let target = cref.get(1).unwrap().as_str();
                match ident::parse_member_id(tree, target) {
                    Ok(node) => {
                        let name = tree.qualified_name(node);
                        trace!("resolved cref `{target}` -> `{name}`");
                        output.push_str(&name);
                    }
                    Err(err) => {
                        trace!("leaving cref `{target}` unresolved: {err}");
                        output.push_str(element);
                    }
                }
            }
            None => output.push_str(element),
        }

        rest = &rest[span_end..];
    }

    output.push_str(rest);
    output
}

/// Second pass over a freshly built tree: resolve every node's summary
/// in place. Operates on a snapshot of the ids present when the pass
/// starts; nodes created during resolution carry no summaries and need
/// no visit of their own.
pub fn resolve_all(tree: &mut SymbolTree) {
    for id in tree.ids() {
        let Some(summary) = tree.node_mut(id).summary.take() else {
            continue;
        };
        let resolved = resolve_summary(tree, &summary);
        tree.node_mut(id).summary = Some(resolved);
    }
}

#[cfg(test)]
mod tests;
