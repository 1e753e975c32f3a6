//! Options reference regeneration.
//!
//! Merges the hand-written regions of an existing document with sections
//! rendered from extracted schema types and the live defaults snapshot.

mod extraction;
mod generator;
mod graph;
mod markdown;
mod snapshot;
mod splitter;
mod value;

#[cfg(test)]
mod tests;

pub use extraction::{Extraction, extract_type_graph, run_command};
pub use generator::{DocsGenerator, regenerate};
pub use graph::{Member, TypeDefinition, TypeGraph};
pub use markdown::{EntryOptions, SectionBuilder, clean_type_signature, render_entry};
pub use snapshot::{ConfigSnapshot, navigate_path};
pub use splitter::{
    DocumentParts, Markers, compute_static_preamble, locate_section_start, locate_trailer_start,
    section_heading_line, split_document,
};
pub use value::{
    CALLABLE_KEY, DefaultValue, MAX_INLINE_WIDTH, callable_placeholder, format_value,
};
