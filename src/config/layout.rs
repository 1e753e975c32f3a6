use serde::{Deserialize, Serialize};

/// One generated section of the document.
///
/// Entries are named `<prefix>.<member>` and their defaults are read from
/// `snapshot_path + [member]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// Extracted type whose members are documented.
    pub type_name: String,
    /// Dotted prefix of every entry heading.
    pub prefix: String,
    /// Keys leading to this section's table in the snapshot.
    #[serde(default)]
    pub snapshot_path: Vec<String>,
    /// Subsection title, emitted as `### <heading>` when entries exist.
    #[serde(default)]
    pub heading: Option<String>,
    /// When set, only these member names are documented.
    #[serde(default)]
    pub allow: Option<Vec<String>>,
    /// Members documented elsewhere (nested sub-schemas).
    #[serde(default)]
    pub skip: Vec<String>,
    /// Also document members declared on ancestor types.
    #[serde(default)]
    pub include_inherited: bool,
    /// Named group rendered after this section's own entries.
    #[serde(default)]
    pub registry: Option<RegistrySpec>,
}

impl SectionSpec {
    /// A section documenting every member of `type_name`.
    pub fn new(
        type_name: impl Into<String>,
        prefix: impl Into<String>,
        snapshot_path: &[&str],
    ) -> Self {
        Self {
            type_name: type_name.into(),
            prefix: prefix.into(),
            snapshot_path: snapshot_path.iter().map(|key| key.to_string()).collect(),
            heading: None,
            allow: None,
            skip: Vec::new(),
            include_inherited: false,
            registry: None,
        }
    }

    /// Sets the subsection title.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Restricts the section to an allow-list of member names.
    pub fn with_allow(mut self, names: &[&str]) -> Self {
        self.allow = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    /// Routes the named members out of the generic loop.
    pub fn with_skip(mut self, names: &[&str]) -> Self {
        self.skip = names.iter().map(|name| name.to_string()).collect();
        self
    }

    /// Documents ancestor members alongside the type's own.
    pub fn with_inherited(mut self) -> Self {
        self.include_inherited = true;
        self
    }

    /// Attaches a registry group.
    pub fn with_registry(mut self, registry: RegistrySpec) -> Self {
        self.registry = Some(registry);
        self
    }
}

/// A polymorphic registry member holding one nested named group.
///
/// The registry member is left out of the outer section. Its group is
/// rendered once, right after the outer entries, from `type_name` with the
/// prefix `<outer prefix>.<segment>` and the snapshot path
/// `<outer snapshot path> + [snapshot_key]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySpec {
    /// Member of the outer type that holds the group.
    pub member: String,
    /// Extracted type describing the group.
    pub type_name: String,
    /// Prefix segment naming the group in entry headings.
    pub segment: String,
    /// Key of the group's table in the snapshot.
    pub snapshot_key: String,
}

/// Global option names documented from the base configuration type.
pub const GLOBAL_OPTIONS: &[&str] = &[
    "prompt",
    "cwd",
    "cwd_prompt",
    "query",
    "resume",
    "multiprocess",
    "file_icons",
    "git_icons",
    "color_icons",
    "header",
    "keymap",
    "actions",
    "fzf_bin",
    "fzf_opts",
];

/// The fixed emission order of the generated sections.
pub fn default_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec::new("picker.Config.Base", "globals", &[]).with_allow(GLOBAL_OPTIONS),
        SectionSpec::new("picker.Config.Winopts", "globals.winopts", &["winopts"])
            .with_heading("Window Options")
            .with_skip(&["preview"]),
        SectionSpec::new(
            "picker.Config.Winopts.Preview",
            "globals.winopts.preview",
            &["winopts", "preview"],
        )
        .with_heading("Preview Window Options"),
        SectionSpec::new(
            "picker.Config.Previewers.Builtin",
            "globals.previewers.builtin",
            &["previewers", "builtin"],
        )
        .with_heading("Builtin Previewer Options")
        .with_inherited(),
        SectionSpec::new("picker.Config.Hls", "globals.hls", &["hls"])
            .with_heading("Highlight Groups")
            .with_registry(RegistrySpec {
                member: "fzf".to_string(),
                type_name: "picker.Config.FzfColors".to_string(),
                segment: "fzf".to_string(),
                snapshot_key: "fzf_colors".to_string(),
            }),
    ]
}
