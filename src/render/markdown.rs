use std::cmp::Ordering;

use crate::model::{NodeId, SymbolKind, SymbolTree};

/// One rendered output page. Writing pages to disk (and creating their
/// directories) is the caller's concern; `path` is the page's directory
/// relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub title: String,
    pub path: String,
    pub markdown: String,
}

/// Render the assembly index plus one page per Type-kind node.
pub fn render(tree: &SymbolTree) -> Vec<RenderedPage> {
    let mut pages = vec![render_index(tree)];
    collect_type_pages(tree, tree.root(), &mut pages);
    pages
}

/// The index page: the whole tree as a nested bullet list. Contiguous
/// namespaces share a line as a dotted run; types link to their pages.
fn render_index(tree: &SymbolTree) -> RenderedPage {
    let mut out = String::new();
    write_index_entry(tree, tree.root(), 0, "", &mut out);
    out.push('\n');
    RenderedPage {
        title: tree.assembly_name().to_string(),
        path: String::new(),
        markdown: out,
    }
}

fn write_index_entry(tree: &SymbolTree, id: NodeId, depth: usize, path: &str, out: &mut String) {
    let node = tree.node(id);
    let collapsed = node.kind == SymbolKind::Namespace
        && node
            .parent
            .is_some_and(|p| tree.node(p).kind == SymbolKind::Namespace);

    let mut next_depth = depth;
    if collapsed {
        out.push('.');
        out.push_str(&node.short_name);
    } else {
        if !out.is_empty() {
            out.push('\n');
        }
        if depth == 0 {
            out.push_str("# ");
            out.push_str(&node.short_name);
        } else {
            for _ in 0..depth - 1 {
                out.push_str("    ");
            }
            out.push_str("- ");
            if node.kind == SymbolKind::Type && !path.is_empty() {
                out.push_str(&format!(
                    "[{}]({path}/{}.md)",
                    node.generic_name(),
                    node.short_name
                ));
            } else {
                out.push_str(&node.definition());
            }
        }
        next_depth = depth + 1;
    }

    let child_path = if path.is_empty() {
        node.short_name.clone()
    } else {
        format!("{path}/{}", node.short_name)
    };
    for child in sorted_children(tree, id) {
        write_index_entry(tree, child, next_depth, &child_path, out);
    }
}

fn collect_type_pages(tree: &SymbolTree, id: NodeId, pages: &mut Vec<RenderedPage>) {
    if tree.node(id).kind == SymbolKind::Type {
        pages.push(render_type_page(tree, id));
    }
    for child in tree.node(id).children().values() {
        collect_type_pages(tree, *child, pages);
    }
}

const MEMBER_SECTIONS: &[(SymbolKind, &str)] = &[
    (SymbolKind::Field, "Fields"),
    (SymbolKind::Property, "Properties"),
    (SymbolKind::IndexerProperty, "Indexers"),
    (SymbolKind::Method, "Methods"),
    (SymbolKind::OperatorMethod, "Operators"),
    (SymbolKind::Event, "Events"),
];

fn render_type_page(tree: &SymbolTree, id: NodeId) -> RenderedPage {
    let node = tree.node(id);
    let mut out = String::new();

    out.push_str(&format!("# {}\n", node.generic_name()));
    if let Some(summary) = &node.summary {
        out.push('\n');
        out.push_str(summary);
        out.push('\n');
    }

    let children = sorted_children(tree, id);
    for (kind, heading) in MEMBER_SECTIONS {
        let members: Vec<NodeId> = children
            .iter()
            .copied()
            .filter(|child| tree.node(*child).kind == *kind)
            .collect();
        if members.is_empty() {
            continue;
        }

        out.push_str(&format!("\n## {heading}\n\n"));
        for member in members {
            let member_node = tree.node(member);
            out.push_str(&format!("- `{}`", member_node.definition()));
            if let Some(summary) = &member_node.summary {
                out.push_str(": ");
                out.push_str(summary);
            }
            out.push('\n');
        }
    }

    // Directory path mirrors the ancestor chain, assembly root included.
    let mut dirs = Vec::new();
    let mut current = node.parent;
    while let Some(ancestor) = current {
        dirs.push(tree.node(ancestor).short_name.clone());
        current = tree.node(ancestor).parent;
    }
    dirs.reverse();

    RenderedPage {
        title: node.short_name.clone(),
        path: dirs.join("/"),
        markdown: out,
    }
}

/// Children in display order: types and members first, ordered by short
/// name; namespaces after, keeping insertion order.
fn sorted_children(tree: &SymbolTree, id: NodeId) -> Vec<NodeId> {
    let mut children: Vec<NodeId> = tree.node(id).children().values().copied().collect();
    children.sort_by(|a, b| {
        let (na, nb) = (tree.node(*a), tree.node(*b));
        match (
            na.kind == SymbolKind::Namespace,
            nb.kind == SymbolKind::Namespace,
        ) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => Ordering::Equal,
            (false, false) => na.short_name.cmp(&nb.short_name),
        }
    });
    children
}
