//! # docmark
//!
//! Core library for turning compiler-emitted XML documentation into a
//! navigable symbol tree and Markdown pages.
//!
//! The input is the XML file compilers produce from doc comments: one
//! `<member name="...">` entry per documented symbol, where `name` holds
//! a compact identifier such as `M:Ns.Type.Method(System.Int32)`. The
//! library parses those identifiers into a mutually consistent tree,
//! resolves inline `cref` references inside summaries to qualified
//! display names, and renders index and per-type Markdown pages as
//! in-memory strings. File I/O in both directions stays with the caller.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! render    → Markdown index and per-type pages
//!   ↓
//! document  → XML loading, two-pass build driver
//!   ↓
//! xref      → inline cross-reference resolution in summaries
//!   ↓
//! ident     → member identifier grammar, tree attachment
//!   ↓
//! model     → SymbolKind, SymbolNode, arena-backed SymbolTree
//! ```

// ============================================================================
// MODULES (dependency order: model → ident → xref → document → render)
// ============================================================================

/// Symbol kinds, nodes, and the arena-backed tree
pub mod model;

/// Member identifier grammar and tree attachment
pub mod ident;

/// Inline cross-reference resolution in summaries
pub mod xref;

/// Documentation XML loading and the two-pass pipeline
pub mod document;

/// Markdown rendering of a finished tree
pub mod render;

mod error;

// Re-export the main entry points and core types
pub use document::{DocFile, DocMember, build_tree, load, parse_document};
pub use error::DocError;
pub use ident::{MemberIdentity, parse_identity, parse_member_id};
pub use model::{NodeId, Parameter, SymbolKind, SymbolNode, SymbolTree};
pub use render::{RenderedPage, render};
pub use xref::{resolve_all, resolve_summary};
