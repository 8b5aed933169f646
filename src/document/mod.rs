//! Documentation file loading and the two-pass pipeline.
//!
//! The loader decodes the XML documentation string into a raw document
//! model; the pipeline feeds every member identifier through the parser
//! (pass one) and resolves summary cross-references (pass two). Reading
//! the file from storage and writing any output stays with the caller.

mod loader;
mod pipeline;

pub use loader::{DocFile, DocMember, load};
pub use pipeline::{build_tree, parse_document};

#[cfg(test)]
mod tests;
