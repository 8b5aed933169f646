//! Member identifier grammar and tree attachment.
//!
//! Compilers emit one compact textual ID per documented symbol, e.g.
//! `M:Ns.Type.Method(System.Int32)`: a one-letter kind prefix, a dotted
//! namespace/type path, and optional generic-arity markers, parameter
//! lists, indexer brackets, and an explicit return-type suffix. This
//! module parses that grammar and materializes the described node in the
//! [`SymbolTree`](crate::model::SymbolTree), creating missing ancestors
//! on the way. Malformed identifiers fail with a recoverable error so a
//! single bad member never aborts the whole document.

mod parser;

pub use parser::{MemberIdentity, parse_identity, parse_member_id};

#[cfg(test)]
mod tests;
