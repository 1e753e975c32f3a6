//! Indexed model of the extracted schema types and their inheritance edges.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One field of an extracted type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Field name as written in the schema.
    pub name: String,
    /// Raw type signature, possibly optional (`string?`) or parenthesized.
    #[serde(default)]
    pub typ: String,
    /// Free-text documentation, possibly spanning several lines.
    #[serde(default)]
    pub description: Option<String>,
}

impl Member {
    /// Whether the member follows the private naming convention.
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }

    /// The member's description, if it has any real text.
    pub fn documentation(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// An extracted type with its members and direct bases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Unique type name.
    pub name: String,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Names of the direct parent types, in declared order.
    #[serde(default)]
    pub bases: Vec<String>,
}

impl TypeDefinition {
    /// Whether this type itself declares a member with the given name.
    pub fn declares(&self, field_name: &str) -> bool {
        self.members.iter().any(|member| member.name == field_name)
    }
}

/// Name-indexed set of type definitions.
///
/// Base names without a matching definition are dead ends rather than
/// errors, and every walk over the base chains carries a visited set so
/// that a cyclic chain terminates.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: HashMap<String, TypeDefinition>,
}

impl TypeGraph {
    /// Builds the index; a later definition with a duplicate name replaces
    /// the earlier one.
    pub fn index(types: impl IntoIterator<Item = TypeDefinition>) -> Self {
        let mut indexed = HashMap::new();
        for definition in types {
            indexed.insert(definition.name.clone(), definition);
        }
        Self { types: indexed }
    }

    /// Looks up a type by name.
    pub fn get(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name)
    }

    /// Number of indexed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the graph holds no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether `field_name` is declared anywhere in the ancestor chain of
    /// `type_name`.
    ///
    /// Bases are searched depth-first in declared order. A branch that leads
    /// back to an already visited type counts as "not inherited".
    pub fn is_inherited(&self, type_name: &str, field_name: &str) -> bool {
        let mut visited = HashSet::from([type_name.to_string()]);
        self.search_bases(type_name, field_name, &mut visited)
    }

    fn search_bases(
        &self,
        type_name: &str,
        field_name: &str,
        visited: &mut HashSet<String>,
    ) -> bool {
        let Some(definition) = self.types.get(type_name) else {
            return false;
        };

        for base in &definition.bases {
            if !visited.insert(base.clone()) {
                debug!(type_name, base = %base, "Skipping already visited base type");
                continue;
            }

            let Some(base_definition) = self.types.get(base) else {
                continue;
            };

            if base_definition.declares(field_name)
                || self.search_bases(base, field_name, visited)
            {
                return true;
            }
        }

        false
    }

    /// Members of `type_name` followed by those of its ancestors.
    ///
    /// Each member name appears once; the first declaration found (own
    /// members first, then ancestors depth-first) wins.
    pub fn members_with_ancestors(&self, type_name: &str) -> Vec<&Member> {
        let mut seen_names = HashSet::new();
        let mut visited = HashSet::new();
        let mut collected = Vec::new();
        self.collect_members(type_name, &mut seen_names, &mut visited, &mut collected);
        collected
    }

    fn collect_members<'a>(
        &'a self,
        type_name: &str,
        seen_names: &mut HashSet<&'a str>,
        visited: &mut HashSet<&'a str>,
        collected: &mut Vec<&'a Member>,
    ) {
        let Some(definition) = self.types.get(type_name) else {
            return;
        };
        if !visited.insert(definition.name.as_str()) {
            return;
        }

        for member in &definition.members {
            if seen_names.insert(member.name.as_str()) {
                collected.push(member);
            }
        }

        for base in &definition.bases {
            self.collect_members(base, seen_names, visited, collected);
        }
    }
}
