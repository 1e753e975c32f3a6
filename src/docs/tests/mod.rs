//! Unit tests for docs module
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic, clippy::unwrap_used)]

mod value;

use crate::docs::{Member, TypeDefinition};

fn member(name: &str, typ: &str, description: Option<&str>) -> Member {
    Member {
        name: name.to_string(),
        typ: typ.to_string(),
        description: description.map(str::to_string),
    }
}

fn type_def(name: &str, bases: &[&str], members: Vec<Member>) -> TypeDefinition {
    TypeDefinition {
        name: name.to_string(),
        members,
        bases: bases.iter().map(|base| base.to_string()).collect(),
    }
}
