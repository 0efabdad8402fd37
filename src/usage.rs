//! Usage text generation for argument sets.
//!
//! Every line is derived from the option declarations of the set and its
//! ancestors; no option has hand-written printing code.

use std::collections::HashSet;
use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::descriptor::{OptionDescriptor, SchemaError, Tier};
use crate::schema::ArgumentSet;

/// Column at which option descriptions start.
///
/// Matches the padding used by javac and scalac.
const OPTION_NAME_PADDING_WIDTH: usize = 29;

const ADVANCED_NOTICE: &str =
    "Advanced options are non-standard and may be changed or removed without any notice.";

/// Errors that can occur while printing usage.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("malformed option declaration: {0}")]
    Schema(#[from] SchemaError),

    #[error("failed to write usage: {0}")]
    Io(#[from] io::Error),
}

/// Print the usage of `arguments` to `sink`.
///
/// Lists basic options, or advanced ones when `advanced` is set.
pub fn print<W: Write + ?Sized>(
    sink: &mut W,
    arguments: &dyn ArgumentSet,
    advanced: bool,
) -> Result<(), UsageError> {
    for line in usage_lines(arguments, advanced)? {
        writeln!(sink, "{}", line)?;
    }
    Ok(())
}

/// Generate the usage text of `arguments`.
pub fn render(arguments: &dyn ArgumentSet, advanced: bool) -> Result<String, UsageError> {
    let mut text = String::new();
    for line in usage_lines(arguments, advanced)? {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

/// Build every line of the usage, header and trailer included.
fn usage_lines(arguments: &dyn ArgumentSet, advanced: bool) -> Result<Vec<String>, UsageError> {
    let tier = Tier::from_advanced(advanced);
    debug!(
        executable = arguments.executable_name(),
        ?tier,
        "rendering usage"
    );

    let mut lines = vec![
        format!(
            "Usage: {} <options> <source files>",
            arguments.executable_name()
        ),
        format!(
            "where {} options include:",
            if advanced { "advanced" } else { "possible" }
        ),
    ];

    let mut rendered_groups = HashSet::new();
    for descriptor in arguments.descriptors() {
        let Some(line) = option_usage(&descriptor, tier)? else {
            continue;
        };
        if !rendered_groups.insert(descriptor.group_key()) {
            debug!(
                option = descriptor.primary_name(),
                "skipping option already listed under its group"
            );
            continue;
        }
        lines.push(line);
    }

    if advanced {
        lines.push(String::new());
        lines.push(ADVANCED_NOTICE.to_string());
    }

    Ok(lines)
}

/// Format one option, or `None` if it belongs to the other tier.
fn option_usage(descriptor: &OptionDescriptor, tier: Tier) -> Result<Option<String>, SchemaError> {
    let count = descriptor.names.len();
    if count == 0 || count > 2 {
        return Err(SchemaError::MalformedNames {
            field: descriptor.field,
            count,
        });
    }

    // Every declaration of a group stands for the one merged line
    if let Some(group) = descriptor.group() {
        if Tier::of(group.key) != tier {
            return Ok(None);
        }
        return Ok(Some(format!(
            "  {} {}",
            descriptor.usage_token(),
            group.description
        )));
    }

    if descriptor.tier() != tier {
        return Ok(None);
    }

    let mut line = String::from("  ");
    line.push_str(&descriptor.usage_token());

    if let Some(alias) = descriptor.alias() {
        line.push_str(" (-");
        line.push_str(alias);
        line.push(')');
    }

    if let Some(value) = descriptor.value_description {
        line.push(' ');
        line.push_str(value);
    }

    let description = descriptor
        .description
        .ok_or_else(|| SchemaError::MissingDescription(descriptor.primary_name().to_string()))?;

    // Choice lines carry their values inline and are not aligned
    if descriptor.is_choice() {
        line.push(' ');
        line.push_str(description);
        return Ok(Some(line));
    }

    // Names reaching past the column by more than a few characters push the
    // description to the next line
    let mut width = OPTION_NAME_PADDING_WIDTH - 1;
    if line.len() >= width + 5 {
        line.push('\n');
        width += line.len();
    }
    while line.len() < width {
        line.push(' ');
    }
    line.push(' ');
    line.push_str(description);

    Ok(Some(line))
}
