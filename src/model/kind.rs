/// Classification of a node in the symbol tree.
///
/// A node's kind is mutable after creation: a path segment first seen as
/// a bare namespace is promoted to [`Type`](SymbolKind::Type) once a
/// member beneath it is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Assembly,
    Namespace,
    Type,
    Field,
    Property,
    IndexerProperty,
    Method,
    OperatorMethod,
    Event,
}

impl SymbolKind {
    /// Whether this kind extends the qualified namespace prefix of the
    /// nodes nested beneath it.
    pub fn extends_namespace(self) -> bool {
        matches!(self, SymbolKind::Namespace | SymbolKind::Type)
    }

    /// Whether this kind documents a single member inside a type.
    pub fn is_member(self) -> bool {
        matches!(
            self,
            SymbolKind::Field
                | SymbolKind::Property
                | SymbolKind::IndexerProperty
                | SymbolKind::Method
                | SymbolKind::OperatorMethod
                | SymbolKind::Event
        )
    }
}
