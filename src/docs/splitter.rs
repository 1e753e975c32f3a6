//! Locating the preserved regions of an existing document.
//!
//! The document is split into a static preamble (everything up to the first
//! generated line of the global options section), the generated region and
//! a static trailer starting at the next preserved top-level section.
//! Lines inside fenced code blocks never count as anchors, except for the
//! section anchor itself.

use regex::Regex;
use tracing::debug;

use crate::{OptrefError, Result, config::SectionSpec};

/// Line predicates recognising the anchors of the document.
#[derive(Debug, Clone)]
pub struct Markers {
    section_start: Regex,
    first_entry: Regex,
    trailer_start: Regex,
    section_headings: Vec<String>,
}

impl Markers {
    /// Compiles the three anchor patterns.
    ///
    /// # Errors
    ///
    /// Returns `OptrefError::ConfigValidation` naming the offending pattern if
    /// any of them is not a valid regular expression.
    pub fn new(section_start: &str, first_entry: &str, trailer_start: &str) -> Result<Self> {
        Ok(Self {
            section_start: compile("section_start", section_start)?,
            first_entry: compile("first_entry", first_entry)?,
            trailer_start: compile("trailer_start", trailer_start)?,
            section_headings: Vec::new(),
        })
    }

    /// Also treats the heading lines of the given sections as the start of
    /// the generated region.
    ///
    /// A section whose predecessors rendered nothing opens the generated
    /// region with its own heading rather than with an entry.
    pub fn with_section_headings(mut self, sections: &[SectionSpec]) -> Self {
        self.section_headings = sections
            .iter()
            .filter_map(|section| section.heading.as_deref())
            .map(section_heading_line)
            .collect();
        self
    }

    /// Whether the line opens the global options section.
    pub fn is_section_start(&self, line: &str) -> bool {
        self.section_start.is_match(line)
    }

    /// Whether the line is the heading of a generated entry.
    pub fn is_entry(&self, line: &str) -> bool {
        self.first_entry.is_match(line)
    }

    /// Whether the line is the first line of generated content: an entry
    /// heading or one of the known section headings.
    pub fn is_generated_start(&self, line: &str) -> bool {
        self.is_entry(line) || self.section_headings.iter().any(|heading| heading == line)
    }

    /// Whether the line opens the preserved trailing section.
    pub fn is_trailer_start(&self, line: &str) -> bool {
        self.trailer_start.is_match(line)
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| OptrefError::ConfigValidation {
        component: format!("document.markers.{name}"),
        details: e.to_string(),
    })
}

/// Heading line emitted above a generated section.
pub fn section_heading_line(heading: &str) -> String {
    format!("### {heading}")
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Indices in `from..to` of lines outside fenced code blocks.
///
/// Fence state is tracked from the start of the document so that a block
/// opened before `from` is still honoured.
fn unfenced_indices<'a>(
    lines: &'a [&'a str],
    from: usize,
    to: usize,
) -> impl Iterator<Item = usize> + 'a {
    let mut fenced = false;
    lines
        .iter()
        .enumerate()
        .take(to)
        .filter_map(move |(index, line)| {
            if is_fence(line) {
                fenced = !fenced;
                return None;
            }
            (!fenced && index >= from).then_some(index)
        })
}

/// Index of the line opening the global options section.
pub fn locate_section_start(lines: &[&str], markers: &Markers) -> Option<usize> {
    lines.iter().position(|line| markers.is_section_start(line))
}

/// Index of the first line of the preserved trailer.
///
/// When the global options section exists the trailer is only looked for
/// after it.
pub fn locate_trailer_start(lines: &[&str], markers: &Markers) -> Option<usize> {
    let from = locate_section_start(lines, markers).map_or(0, |start| start + 1);

    unfenced_indices(lines, from, lines.len())
        .find(|&index| markers.is_trailer_start(lines[index]))
}

/// Inclusive index of the last preamble line, if the section anchor exists.
///
/// The preamble ends right before the first generated line (or before the
/// trailer when nothing was generated, or at the end of the document), with
/// trailing blank lines trimmed but never past the section anchor itself.
pub fn compute_static_preamble(lines: &[&str], markers: &Markers) -> Option<usize> {
    let start = locate_section_start(lines, markers)?;
    let limit = locate_trailer_start(lines, markers).unwrap_or(lines.len());

    let first_generated = unfenced_indices(lines, start + 1, limit)
        .find(|&index| markers.is_generated_start(lines[index]))
        .unwrap_or(limit);

    let mut end = first_generated - 1;
    while end > start && lines[end].trim().is_empty() {
        end -= 1;
    }

    debug!(start, first_generated, end, "Computed static preamble bounds");
    Some(end)
}

/// The preserved regions of an existing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentParts<'a> {
    /// Preamble lines, or `None` when the section anchor is missing and the
    /// fallback header must be used.
    pub preamble: Option<&'a [&'a str]>,
    /// Trailer lines, or `None` when there is nothing to reattach.
    pub trailer: Option<&'a [&'a str]>,
}

/// Splits a document into its preserved regions.
pub fn split_document<'a>(lines: &'a [&'a str], markers: &Markers) -> DocumentParts<'a> {
    let preamble = compute_static_preamble(lines, markers).map(|end| &lines[..=end]);
    let trailer = locate_trailer_start(lines, markers).map(|start| &lines[start..]);

    DocumentParts { preamble, trailer }
}
