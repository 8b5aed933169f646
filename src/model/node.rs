use indexmap::IndexMap;

use super::kind::SymbolKind;

/// Unique identifier for a node in the tree arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from an arena index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A generic or input parameter attached to a symbol node.
///
/// Parameters extracted from identifier strings carry the parameter's
/// type text in `name` (identifiers hold no argument names); synthetic
/// generic parameters carry `T` or `T1..TN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A node in the symbol tree: the assembly root, a namespace, a type, or
/// one of a type's members.
#[derive(Debug, Clone)]
pub struct SymbolNode {
    pub kind: SymbolKind,
    /// Identifier segment without namespace, generics, or parameter
    /// decoration.
    pub short_name: String,
    /// Synthetic generic parameters; length equals the generic arity.
    pub generic_parameters: Vec<Parameter>,
    pub input_parameters: Vec<Parameter>,
    /// Explicit return type from the identifier's `~` suffix, if any.
    pub return_type: Option<String>,
    /// Documentation text; resolved in place by the cross-reference pass.
    pub summary: Option<String>,
    /// Non-owning back-reference; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Insertion-ordered map from definition key to child node.
    pub(crate) children: IndexMap<String, NodeId>,
}

impl SymbolNode {
    pub fn new(kind: SymbolKind, short_name: impl Into<String>) -> Self {
        Self {
            kind,
            short_name: short_name.into(),
            generic_parameters: Vec::new(),
            input_parameters: Vec::new(),
            return_type: None,
            summary: None,
            parent: None,
            children: IndexMap::new(),
        }
    }

    /// Short name plus the generic parameter list, e.g. `C<T1,T2>`.
    pub fn generic_name(&self) -> String {
        if self.generic_parameters.is_empty() {
            return self.short_name.clone();
        }
        let list: Vec<&str> = self
            .generic_parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        format!("{}<{}>", self.short_name, list.join(","))
    }

    /// Generic name plus the input parameter list, e.g.
    /// `Spin(System.Int32)`. Members without input parameters render
    /// without parentheses.
    pub fn full_name(&self) -> String {
        if self.input_parameters.is_empty() {
            return self.generic_name();
        }
        let list: Vec<&str> = self
            .input_parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        format!("{}({})", self.generic_name(), list.join(","))
    }

    /// Full name plus the explicit return type, when one was declared.
    /// This is the key a node is stored under in its parent's children
    /// map, disambiguating overloads and generic instantiations.
    pub fn definition(&self) -> String {
        match &self.return_type {
            Some(ret) => format!("{} [{ret}]", self.full_name()),
            None => self.full_name(),
        }
    }

    /// Ordered children, keyed by definition.
    pub fn children(&self) -> &IndexMap<String, NodeId> {
        &self.children
    }
}
