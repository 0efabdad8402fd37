//! Option declarations and the descriptors derived from them.

use serde::Serialize;
use thiserror::Error;

/// Reserved name prefix marking an option as advanced.
pub const ADVANCED_PREFIX: &str = "X";

/// Errors in the authoring of an argument set.
///
/// These are programming mistakes in a schema, never user input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("option field '{field}' declares {count} names: there should be 1 or 2")]
    MalformedNames { field: &'static str, count: usize },

    #[error("no description for option '{0}'")]
    MissingDescription(String),

    #[error("option '{name}' is declared more than once (field '{field}')")]
    DuplicateOption { name: String, field: &'static str },

    #[error("option '{0}' names a value its group does not have")]
    UnknownGroupValue(String),
}

/// A multi-way choice that may also be declared as one flag per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGroup {
    /// Name shared by every member, before the `=`
    pub key: &'static str,
    /// Values in the order usage lists them
    pub choices: &'static [&'static str],
    /// Description of the merged usage line
    pub description: &'static str,
}

impl OptionGroup {
    /// The merged spelling, e.g. `Xcoroutines={enable|warn|error}`.
    pub fn placeholder(&self) -> String {
        format!("{}={{{}}}", self.key, self.choices.join("|"))
    }

    /// The value part of a member name such as `Xcoroutines=warn`.
    pub fn member_value<'n>(&self, name: &'n str) -> Option<&'n str> {
        name.strip_prefix(self.key)?.strip_prefix('=')
    }
}

/// How coroutine support is selected (`-Xcoroutines=<mode>`).
pub const COROUTINES_GROUP: OptionGroup = OptionGroup {
    key: "Xcoroutines",
    choices: &["enable", "warn", "error"],
    description: "Enable coroutines or report warnings or errors on declarations and use sites of 'suspend' modifier",
};

/// Every group whose members are merged into one usage line.
pub const OPTION_GROUPS: &[OptionGroup] = &[COROUTINES_GROUP];

/// Visibility tier of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Listed by the ordinary help request
    Basic,
    /// Listed only when advanced help is requested
    Advanced,
}

impl Tier {
    /// Tier matching the advanced-help flag of a render call.
    pub fn from_advanced(advanced: bool) -> Tier {
        if advanced {
            Tier::Advanced
        } else {
            Tier::Basic
        }
    }

    /// Derive the tier from an option's primary name.
    ///
    /// `X` alone is a basic option (it requests advanced help); anything
    /// longer that starts with `X` is advanced.
    pub fn of(primary_name: &str) -> Tier {
        if primary_name.starts_with(ADVANCED_PREFIX) && primary_name.len() > ADVANCED_PREFIX.len()
        {
            Tier::Advanced
        } else {
            Tier::Basic
        }
    }
}

/// Argument metadata attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentMeta {
    /// External names, primary first, then an optional short alias
    pub names: &'static [&'static str],
    /// Human-readable description shown in usage
    pub description: Option<&'static str>,
    /// Placeholder for the option's value (e.g. `<path>`)
    pub value_description: Option<&'static str>,
    /// Allowed values for an enumerated option, in display order
    pub choices: &'static [&'static str],
}

/// Declaration of one field of an argument set.
///
/// Fields declared with [`FieldDecl::plain`] hold data but are not
/// command-line options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Name of the Rust field this declaration describes
    pub field: &'static str,
    /// Argument metadata, absent for fields that are not options
    pub argument: Option<ArgumentMeta>,
}

impl FieldDecl {
    /// A field that is not a command-line option.
    pub const fn plain(field: &'static str) -> Self {
        Self {
            field,
            argument: None,
        }
    }

    /// An option field known by `names`.
    pub const fn option(field: &'static str, names: &'static [&'static str]) -> Self {
        Self {
            field,
            argument: Some(ArgumentMeta {
                names,
                description: None,
                value_description: None,
                choices: &[],
            }),
        }
    }

    pub const fn description(self, text: &'static str) -> Self {
        match self.argument {
            Some(meta) => Self {
                field: self.field,
                argument: Some(ArgumentMeta {
                    description: Some(text),
                    ..meta
                }),
            },
            None => self,
        }
    }

    pub const fn value(self, placeholder: &'static str) -> Self {
        match self.argument {
            Some(meta) => Self {
                field: self.field,
                argument: Some(ArgumentMeta {
                    value_description: Some(placeholder),
                    ..meta
                }),
            },
            None => self,
        }
    }

    pub const fn choices(self, choices: &'static [&'static str]) -> Self {
        match self.argument {
            Some(meta) => Self {
                field: self.field,
                argument: Some(ArgumentMeta { choices, ..meta }),
            },
            None => self,
        }
    }

    /// Derive the option descriptor, or `None` if this field is not an option.
    pub fn descriptor(&self) -> Option<OptionDescriptor> {
        self.argument.map(|meta| OptionDescriptor {
            field: self.field,
            names: meta.names,
            description: meta.description,
            value_description: meta.value_description,
            choices: meta.choices,
        })
    }
}

fn no_choices(choices: &&[&str]) -> bool {
    choices.is_empty()
}

/// Everything the usage renderer and the parser know about one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    pub field: &'static str,
    pub names: &'static [&'static str],
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_description: Option<&'static str>,
    #[serde(skip_serializing_if = "no_choices")]
    pub choices: &'static [&'static str],
}

impl OptionDescriptor {
    /// The primary name, or an empty string if no names are declared.
    pub fn primary_name(&self) -> &'static str {
        self.names.first().copied().unwrap_or_default()
    }

    /// The short alias, if declared.
    pub fn alias(&self) -> Option<&'static str> {
        self.names.get(1).copied()
    }

    pub fn tier(&self) -> Tier {
        Tier::of(self.primary_name())
    }

    /// The group this option belongs to, if any.
    ///
    /// Only the groups in [`OPTION_GROUPS`] are recognized: their choice
    /// option (`Xcoroutines`) and their per-value flags
    /// (`Xcoroutines=warn`). Other names containing `=` are ordinary.
    pub fn group(&self) -> Option<&'static OptionGroup> {
        let primary = self.primary_name();
        OPTION_GROUPS
            .iter()
            .find(|group| primary == group.key || group.member_value(primary).is_some())
    }

    /// Whether this option is one per-value flag of a group.
    pub fn is_group_member(&self) -> bool {
        self.group()
            .is_some_and(|group| group.member_value(self.primary_name()).is_some())
    }

    /// Key shared by all declarations of one multi-way choice, otherwise
    /// the primary name.
    pub fn group_key(&self) -> &'static str {
        match self.group() {
            Some(group) => group.key,
            None => self.primary_name(),
        }
    }

    pub fn is_choice(&self) -> bool {
        !self.choices.is_empty()
    }

    /// The option as spelled in usage, without alias or placeholder.
    ///
    /// Group declarations all spell the merged form with the group's own
    /// value order.
    pub fn usage_token(&self) -> String {
        if let Some(group) = self.group() {
            format!("-{}", group.placeholder())
        } else if self.is_choice() {
            format!("-{}={{{}}}", self.primary_name(), self.choices.join("|"))
        } else {
            format!("-{}", self.primary_name())
        }
    }

    /// Whether `name` (without the leading dash) is one of this option's names.
    pub fn is_named(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| *candidate == name)
    }

    /// Check the authoring contract: 1 or 2 names and a description.
    ///
    /// Group declarations are described by their group.
    pub fn check(&self) -> Result<(), SchemaError> {
        if self.names.is_empty() || self.names.len() > 2 {
            return Err(SchemaError::MalformedNames {
                field: self.field,
                count: self.names.len(),
            });
        }
        if self.description.is_none() && self.group().is_none() {
            return Err(SchemaError::MissingDescription(self.primary_name().to_string()));
        }
        Ok(())
    }
}
