//! compiler-args - Declarative compiler argument schema and usage renderer.
//!
//! This library declares the options of a family of compiler front-ends as
//! plain data, fills them from command-line arguments, and renders aligned
//! usage text for the basic or the advanced option tier.

pub mod common;
pub mod descriptor;
pub mod jvm;
pub mod parser;
pub mod schema;
pub mod usage;

pub use common::{CommonArguments, CoroutinesState, PLUGIN_OPTION_FORMAT};
pub use descriptor::{
    FieldDecl, OptionDescriptor, OptionGroup, SchemaError, Tier, COROUTINES_GROUP, OPTION_GROUPS,
};
pub use jvm::JvmArguments;
pub use parser::{parse_command_line_arguments, ParseError};
pub use schema::{validate_schema, ArgumentSet, Choice, ValueMut};
pub use usage::{print, render, UsageError};
