use rustc_hash::FxHashMap;

use super::kind::SymbolKind;
use super::node::{NodeId, SymbolNode};

/// Arena-backed tree of documented symbols.
///
/// Nodes are owned by the arena; downward edges live in each node's
/// insertion-ordered children map and the upward edge is a plain index,
/// so no ownership cycle exists. All mutation is append-only: nodes are
/// never removed and children maps only grow, which keeps every `NodeId`
/// valid for the life of the tree.
pub struct SymbolTree {
    arena: Vec<SymbolNode>,
    root: NodeId,
    /// Index for O(1) qualified-name lookups: qname -> NodeId.
    nodes_by_qname: FxHashMap<String, NodeId>,
}

impl SymbolTree {
    /// Create a tree holding an unnamed assembly root. The root is named
    /// once the source document's `<name>` element has been read.
    pub fn new() -> Self {
        let root = SymbolNode::new(SymbolKind::Assembly, "");
        Self {
            arena: vec![root],
            root: NodeId::new(0),
            nodes_by_qname: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn assembly_name(&self) -> &str {
        &self.node(self.root).short_name
    }

    pub fn set_assembly_name(&mut self, name: impl Into<String>) {
        self.arena[self.root.index()].short_name = name.into();
    }

    /// Borrow a node. Ids are only minted by this tree and nodes are
    /// never removed, so any id handed out stays valid.
    pub fn node(&self, id: NodeId) -> &SymbolNode {
        &self.arena[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SymbolNode {
        &mut self.arena[id.index()]
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Snapshot of all node ids in creation order.
    pub fn ids(&self) -> Vec<NodeId> {
        (0..self.arena.len() as u32).map(NodeId).collect()
    }

    /// Pure lookup of a direct child under its definition key. Never
    /// creates nodes.
    pub fn child_by_key(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        self.node(parent).children.get(key).copied()
    }

    /// Pure lookup by exact qualified name. Never creates nodes.
    pub fn lookup(&self, qualified_name: &str) -> Option<NodeId> {
        self.nodes_by_qname.get(qualified_name).copied()
    }

    /// Walk `segments` down from the root, creating a Namespace node for
    /// any segment not yet present, and return the leaf of the path.
    pub fn get_or_create_path<S: AsRef<str>>(&mut self, segments: &[S]) -> NodeId {
        let mut current = self.root;
        for segment in segments {
            let segment = segment.as_ref();
            current = match self.child_by_key(current, segment) {
                Some(child) => child,
                None => {
                    self.insert_child(current, SymbolNode::new(SymbolKind::Namespace, segment))
                }
            };
        }
        current
    }

    /// Insert `node` under `parent`, keyed by its definition. If the key
    /// is already taken the existing child wins and `node` is discarded;
    /// duplicate identifiers in a source document are not errors.
    pub fn insert_child(&mut self, parent: NodeId, mut node: SymbolNode) -> NodeId {
        let key = node.definition();
        if let Some(existing) = self.node(parent).children.get(&key) {
            return *existing;
        }
        node.parent = Some(parent);
        let id = NodeId::new(self.arena.len());
        self.arena.push(node);
        self.arena[parent.index()].children.insert(key, id);

        let qualified = self.qualified_name(id);
        self.nodes_by_qname.entry(qualified).or_insert(id);
        id
    }

    /// Promote a placeholder node to Type. Parsing a member under a path
    /// marks the path's leaf as a type even when it was first seen as a
    /// bare namespace segment.
    pub fn promote_to_type(&mut self, id: NodeId) {
        self.arena[id.index()].kind = SymbolKind::Type;
    }

    /// Dotted namespace/type prefix of `id`: the short names of the
    /// Namespace- and Type-kind ancestors strictly between the root and
    /// the node. Contiguous Namespace ancestors thereby collapse into a
    /// single dotted run.
    pub fn namespace_prefix(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(ancestor) = current {
            let node = self.node(ancestor);
            if node.parent.is_some() && node.kind.extends_namespace() {
                parts.push(node.short_name.as_str());
            }
            current = node.parent;
        }
        parts.reverse();
        parts.join(".")
    }

    /// Fully qualified display name: namespace prefix plus the node's
    /// own definition.
    pub fn qualified_name(&self, id: NodeId) -> String {
        let definition = self.node(id).definition();
        let prefix = self.namespace_prefix(id);
        if prefix.is_empty() {
            definition
        } else {
            format!("{prefix}.{definition}")
        }
    }
}

impl Default for SymbolTree {
    fn default() -> Self {
        Self::new()
    }
}
