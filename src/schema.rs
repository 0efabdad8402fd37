//! The argument set contract shared by every tool.

use std::collections::HashSet;

use crate::common::CommonArguments;
use crate::descriptor::{FieldDecl, OptionDescriptor, SchemaError};

/// Mutable view of an option's storage, handed to the parser.
pub enum ValueMut<'a> {
    /// A boolean switch
    Flag(&'a mut bool),
    /// A single value, absent until given
    Text(&'a mut Option<String>),
    /// A comma-separated, repeatable value
    List(&'a mut Vec<String>),
    /// One value out of a fixed set of choices
    Choice(&'a mut dyn Choice),
}

/// A field holding one value out of a fixed set of choices.
pub trait Choice {
    /// Select `value`; returns `false` if it is not one of the choices.
    fn select(&mut self, value: &str) -> bool;
}

/// A tool's full set of options.
///
/// Tool-specific sets embed the set they extend and return it from
/// [`ArgumentSet::parent`]. Discovery visits the most-derived set first,
/// each set's fields in declared order.
pub trait ArgumentSet {
    /// Name of the executable shown in the usage header.
    fn executable_name(&self) -> &'static str;

    /// Fields declared directly on this set, in declaration order.
    fn declared_fields(&self) -> &'static [FieldDecl];

    /// The set this one extends, if any.
    fn parent(&self) -> Option<&dyn ArgumentSet>;

    fn parent_mut(&mut self) -> Option<&mut dyn ArgumentSet>;

    /// Storage of an option field declared directly on this set.
    fn value_mut(&mut self, field: &str) -> Option<ValueMut<'_>>;

    /// The options shared by every tool.
    fn common(&self) -> &CommonArguments;

    fn common_mut(&mut self) -> &mut CommonArguments;

    /// Every option reachable from this set, most-derived set first.
    fn descriptors(&self) -> Vec<OptionDescriptor> {
        let mut descriptors: Vec<OptionDescriptor> = self
            .declared_fields()
            .iter()
            .filter_map(FieldDecl::descriptor)
            .collect();
        if let Some(parent) = self.parent() {
            descriptors.extend(parent.descriptors());
        }
        descriptors
    }

    /// Storage of an option field declared anywhere in the chain.
    fn field_mut(&mut self, field: &str) -> Option<ValueMut<'_>> {
        if self.declared_fields().iter().any(|decl| decl.field == field) {
            return self.value_mut(field);
        }
        self.parent_mut()?.field_mut(field)
    }

    /// Positional arguments collected by the parser.
    fn free_args(&self) -> &[String] {
        &self.common().free_args
    }

    /// Unrecognized advanced flags collected by the parser.
    fn unknown_extra_flags(&self) -> &[String] {
        &self.common().unknown_extra_flags
    }
}

/// Check the authoring contract over a set's whole chain.
///
/// Every option needs 1 or 2 names and a description, and no option may
/// reuse a name already declared elsewhere in the chain. Declarations of
/// one group (`Xcoroutines`, `Xcoroutines=warn`, ...) may coexist, but a
/// per-value flag must name one of the group's values.
pub fn validate_schema(arguments: &dyn ArgumentSet) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for descriptor in arguments.descriptors() {
        descriptor.check()?;

        if let Some(group) = descriptor.group() {
            if let Some(value) = group.member_value(descriptor.primary_name()) {
                if !group.choices.contains(&value) {
                    return Err(SchemaError::UnknownGroupValue(
                        descriptor.primary_name().to_string(),
                    ));
                }
            }
        }

        for name in descriptor.names {
            if !seen.insert(*name) {
                return Err(SchemaError::DuplicateOption {
                    name: name.to_string(),
                    field: descriptor.field,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CoroutinesState;
    use crate::jvm::JvmArguments;

    /// A tool that redeclares a base option.
    #[derive(Default)]
    struct Clashing {
        common: CommonArguments,
        quiet: bool,
    }

    const CLASHING_FIELDS: &[FieldDecl] = &[FieldDecl::option("quiet", &["nowarn"])
        .description("Generate no warnings at all")];

    impl ArgumentSet for Clashing {
        fn executable_name(&self) -> &'static str {
            "clashing"
        }

        fn declared_fields(&self) -> &'static [FieldDecl] {
            CLASHING_FIELDS
        }

        fn parent(&self) -> Option<&dyn ArgumentSet> {
            Some(&self.common)
        }

        fn parent_mut(&mut self) -> Option<&mut dyn ArgumentSet> {
            Some(&mut self.common)
        }

        fn value_mut(&mut self, field: &str) -> Option<ValueMut<'_>> {
            match field {
                "quiet" => Some(ValueMut::Flag(&mut self.quiet)),
                _ => None,
            }
        }

        fn common(&self) -> &CommonArguments {
            &self.common
        }

        fn common_mut(&mut self) -> &mut CommonArguments {
            &mut self.common
        }
    }

    #[test]
    fn test_validate_common_schema() {
        validate_schema(&CommonArguments::create_default_instance()).unwrap();
    }

    #[test]
    fn test_validate_jvm_schema() {
        validate_schema(&JvmArguments::create_default_instance()).unwrap();
    }

    #[test]
    fn test_validate_rejects_redeclared_name() {
        let err = validate_schema(&Clashing::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateOption {
                name: "nowarn".to_string(),
                field: "suppress_warnings",
            }
        );
    }

    /// A tool that adds per-value coroutines flags over the base choice.
    #[derive(Default)]
    struct PerValue {
        common: CommonArguments,
        coroutines_enable: bool,
        coroutines_error: bool,
    }

    static PER_VALUE_FIELDS: &[FieldDecl] = &[
        FieldDecl::option("coroutines_enable", &["Xcoroutines=enable"]).description(""),
        FieldDecl::option("coroutines_error", &["Xcoroutines=error"]).description(""),
    ];

    static MISSPELLED_FIELDS: &[FieldDecl] =
        &[FieldDecl::option("coroutines_maybe", &["Xcoroutines=maybe"]).description("")];

    impl ArgumentSet for PerValue {
        fn executable_name(&self) -> &'static str {
            "per-value"
        }

        fn declared_fields(&self) -> &'static [FieldDecl] {
            PER_VALUE_FIELDS
        }

        fn parent(&self) -> Option<&dyn ArgumentSet> {
            Some(&self.common)
        }

        fn parent_mut(&mut self) -> Option<&mut dyn ArgumentSet> {
            Some(&mut self.common)
        }

        fn value_mut(&mut self, field: &str) -> Option<ValueMut<'_>> {
            match field {
                "coroutines_enable" => Some(ValueMut::Flag(&mut self.coroutines_enable)),
                "coroutines_error" => Some(ValueMut::Flag(&mut self.coroutines_error)),
                _ => None,
            }
        }

        fn common(&self) -> &CommonArguments {
            &self.common
        }

        fn common_mut(&mut self) -> &mut CommonArguments {
            &mut self.common
        }
    }

    /// Same chain, but with a flag for a value the group does not have.
    #[derive(Default)]
    struct Misspelled(CommonArguments);

    impl ArgumentSet for Misspelled {
        fn executable_name(&self) -> &'static str {
            "misspelled"
        }

        fn declared_fields(&self) -> &'static [FieldDecl] {
            MISSPELLED_FIELDS
        }

        fn parent(&self) -> Option<&dyn ArgumentSet> {
            Some(&self.0)
        }

        fn parent_mut(&mut self) -> Option<&mut dyn ArgumentSet> {
            Some(&mut self.0)
        }

        fn value_mut(&mut self, _field: &str) -> Option<ValueMut<'_>> {
            None
        }

        fn common(&self) -> &CommonArguments {
            &self.0
        }

        fn common_mut(&mut self) -> &mut CommonArguments {
            &mut self.0
        }
    }

    #[test]
    fn test_validate_accepts_group_members() {
        validate_schema(&PerValue::default()).unwrap();
    }

    #[test]
    fn test_validate_rejects_unknown_group_value() {
        let err = validate_schema(&Misspelled::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownGroupValue("Xcoroutines=maybe".to_string())
        );
    }

    #[test]
    fn test_descriptors_most_derived_first() {
        let arguments = JvmArguments::create_default_instance();
        let names: Vec<&str> = arguments
            .descriptors()
            .iter()
            .map(|descriptor| descriptor.primary_name())
            .collect();

        let destination = names.iter().position(|name| *name == "d").unwrap();
        let language = names
            .iter()
            .position(|name| *name == "language-version")
            .unwrap();
        assert_eq!(destination, 0);
        assert!(language > destination);
        assert_eq!(names.last(), Some(&"P"));
    }

    #[test]
    fn test_descriptors_skip_plain_fields() {
        let arguments = JvmArguments::create_default_instance();
        let fields: Vec<&str> = arguments
            .descriptors()
            .iter()
            .map(|descriptor| descriptor.field)
            .collect();
        assert!(!fields.contains(&"friend_paths"));
        assert!(!fields.contains(&"free_args"));
        assert!(!fields.contains(&"unknown_extra_flags"));
    }

    #[test]
    fn test_field_mut_reaches_parent_fields() {
        let mut arguments = Clashing::default();

        match arguments.field_mut("quiet") {
            Some(ValueMut::Flag(value)) => *value = true,
            _ => panic!("Expected flag storage for quiet"),
        }
        match arguments.field_mut("verbose") {
            Some(ValueMut::Flag(value)) => *value = true,
            _ => panic!("Expected flag storage for verbose"),
        }
        match arguments.field_mut("coroutines") {
            Some(ValueMut::Choice(choice)) => assert!(choice.select("error")),
            _ => panic!("Expected choice storage for coroutines"),
        }

        assert!(arguments.quiet);
        assert!(arguments.common.verbose);
        assert_eq!(arguments.common.coroutines, CoroutinesState::Error);
        assert!(arguments.field_mut("no_such_field").is_none());
    }
}
