use std::collections::HashSet;

use tracing::debug;

use super::{
    graph::{Member, TypeDefinition, TypeGraph},
    snapshot::ConfigSnapshot,
    splitter::section_heading_line,
    value::format_value,
};
use crate::config::{RegistrySpec, SectionSpec};

const INHERITED_BADGE: &str = " (inherited)";

/// Filters applied while rendering one type's members.
#[derive(Debug, Clone, Default)]
pub struct EntryOptions<'a> {
    /// Only these names are rendered when set.
    pub allow: Option<&'a [String]>,
    /// Names routed to a separate rendering.
    pub skip: Vec<&'a str>,
    /// Walk ancestor types for further members.
    pub include_inherited: bool,
}

impl<'a> EntryOptions<'a> {
    fn from_section(section: &'a SectionSpec) -> Self {
        let mut skip: Vec<&str> = section.skip.iter().map(String::as_str).collect();
        if let Some(registry) = &section.registry {
            skip.push(registry.member.as_str());
        }

        Self {
            allow: section.allow.as_deref(),
            skip,
            include_inherited: section.include_inherited,
        }
    }

    fn admits(&self, member: &Member) -> bool {
        if member.is_private() || self.skip.contains(&member.name.as_str()) {
            return false;
        }
        self.allow
            .is_none_or(|allowed| allowed.iter().any(|name| *name == member.name))
    }
}

/// Renders documentation entries for extracted types.
///
/// Holds read-only handles to the type graph and the defaults snapshot for
/// the duration of one run.
pub struct SectionBuilder<'a> {
    graph: &'a TypeGraph,
    snapshot: &'a ConfigSnapshot,
}

impl<'a> SectionBuilder<'a> {
    /// Creates a builder over a graph and a snapshot.
    pub fn new(graph: &'a TypeGraph, snapshot: &'a ConfigSnapshot) -> Self {
        Self { graph, snapshot }
    }

    /// Renders every section in order.
    pub fn render_sections(&self, sections: &[SectionSpec]) -> Vec<String> {
        sections
            .iter()
            .flat_map(|section| self.render_section(section))
            .collect()
    }

    /// Renders one configured section, including its registry group.
    ///
    /// A section whose type is missing from the graph, or which ends up
    /// with no documented entries, renders nothing at all (not even its
    /// heading).
    pub fn render_section(&self, section: &SectionSpec) -> Vec<String> {
        let Some(definition) = self.graph.get(&section.type_name) else {
            debug!(type_name = %section.type_name, "Type not extracted, omitting section");
            return Vec::new();
        };

        let options = EntryOptions::from_section(section);
        let mut lines = self.render_entries(
            &section.prefix,
            definition,
            &section.snapshot_path,
            &options,
        );

        if let Some(registry) = &section.registry {
            lines.extend(self.render_registry(section, registry));
        }

        match &section.heading {
            Some(heading) if !lines.is_empty() => {
                let mut with_heading = vec![section_heading_line(heading), String::new()];
                with_heading.extend(lines);
                with_heading
            }
            _ => lines,
        }
    }

    fn render_registry(&self, section: &SectionSpec, registry: &RegistrySpec) -> Vec<String> {
        let Some(group) = self.graph.get(&registry.type_name) else {
            debug!(type_name = %registry.type_name, "Registry group type not extracted");
            return Vec::new();
        };

        let prefix = format!("{}.{}", section.prefix, registry.segment);
        let mut snapshot_path = section.snapshot_path.clone();
        snapshot_path.push(registry.snapshot_key.clone());

        self.render_entries(&prefix, group, &snapshot_path, &EntryOptions::default())
    }

    /// Renders one entry per documented member of `definition`.
    ///
    /// Members are visited in declaration order. Private members, members
    /// without a description and members rejected by `options` are left
    /// out, and no member name is rendered twice.
    pub fn render_entries(
        &self,
        prefix: &str,
        definition: &TypeDefinition,
        snapshot_path: &[String],
        options: &EntryOptions<'_>,
    ) -> Vec<String> {
        let members: Vec<&Member> = if options.include_inherited {
            self.graph.members_with_ancestors(&definition.name)
        } else {
            definition.members.iter().collect()
        };

        let mut rendered_names = HashSet::new();
        let mut lines = Vec::new();

        for member in members {
            if !options.admits(member) {
                continue;
            }
            let Some(description) = member.documentation() else {
                debug!(prefix, member = %member.name, "Skipping undocumented member");
                continue;
            };
            if !rendered_names.insert(member.name.as_str()) {
                continue;
            }

            let mut path = snapshot_path.to_vec();
            path.push(member.name.clone());
            let default = format_value(&self.snapshot.resolve(&path));
            let inherited = self.graph.is_inherited(&definition.name, &member.name);

            lines.extend(render_entry(
                &format!("{prefix}.{}", member.name),
                clean_type_signature(&member.typ),
                &default,
                description,
                inherited,
            ));
        }

        lines
    }
}

/// Formats a single documentation entry.
///
/// The description is copied line by line, fenced code included, and the
/// entry ends with a blank line.
pub fn render_entry(
    name: &str,
    type_name: &str,
    default: &str,
    description: &str,
    inherited: bool,
) -> Vec<String> {
    let badge = if inherited { INHERITED_BADGE } else { "" };

    let mut lines = vec![
        format!("#### {name}{badge}"),
        String::new(),
        format!("Type: {type_name}, Default: {default}"),
        String::new(),
    ];
    lines.extend(description.trim_end().lines().map(str::to_string));
    lines.push(String::new());
    lines
}

/// Cleans a raw type signature for display.
///
/// Strips one trailing optional marker, then one layer of parentheses when
/// they enclose the whole signature.
///
/// ```
/// use optref::docs::clean_type_signature;
///
/// assert_eq!(clean_type_signature("string?"), "string");
/// assert_eq!(clean_type_signature("(string|boolean)?"), "string|boolean");
/// assert_eq!(clean_type_signature("(fun())|(fun(x))"), "(fun())|(fun(x))");
/// ```
pub fn clean_type_signature(raw: &str) -> &str {
    let trimmed = raw.trim();
    let required = trimmed.strip_suffix('?').unwrap_or(trimmed);
    strip_enclosing_parens(required)
}

fn strip_enclosing_parens(signature: &str) -> &str {
    let Some(inner) = signature
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return signature;
    };

    let last = signature.len() - 1;
    let mut depth = 0usize;
    for (index, c) in signature.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && index != last {
                    return signature;
                }
            }
            _ => {}
        }
    }

    inner
}
