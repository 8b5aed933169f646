use tracing::warn;

use crate::error::DocError;
use crate::ident;
use crate::model::SymbolTree;
use crate::xref;

use super::loader::{self, DocFile};

/// First pass: build the symbol tree from the raw document model.
///
/// Malformed identifiers are logged and skipped; the rest of the
/// document still parses. Summaries attach to their nodes as they are
/// created; duplicate identifiers keep the first summary seen.
pub fn build_tree(doc: &DocFile) -> SymbolTree {
    let mut tree = SymbolTree::new();
    tree.set_assembly_name(&doc.assembly_name);

    for member in &doc.members {
        let id = match ident::parse_member_id(&mut tree, &member.name) {
            Ok(id) => id,
            Err(err) => {
                warn!("skipping member `{}`: {err}", member.name);
                continue;
            }
        };
        if let Some(summary) = &member.summary {
            let node = tree.node_mut(id);
            if node.summary.is_none() {
                node.summary = Some(summary.clone());
            }
        }
    }

    tree
}

/// Parse a documentation XML string all the way to a resolved symbol
/// tree: load the document, build the tree, then resolve every summary's
/// inline references in place.
pub fn parse_document(xml: &str) -> Result<SymbolTree, DocError> {
    let doc = loader::load(xml)?;
    let mut tree = build_tree(&doc);
    xref::resolve_all(&mut tree);
    Ok(tree)
}
