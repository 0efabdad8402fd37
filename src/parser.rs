//! Filling argument sets from command-line arguments.

use std::slice::Iter;

use thiserror::Error;
use tracing::debug;

use crate::descriptor::{OptionDescriptor, ADVANCED_PREFIX};
use crate::schema::{ArgumentSet, ValueMut};

/// Errors that can occur during argument parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no value passed for argument {0}")]
    MissingValue(String),

    #[error("option field '{0}' has no storage")]
    UnboundField(&'static str),
}

/// Parse `args` into `arguments`.
///
/// Values are not validated. Arguments that are not options are appended
/// to the free arguments; unrecognized `-X` flags are collected as unknown
/// extra flags, any other unrecognized argument is kept as a free argument.
pub fn parse_command_line_arguments(
    args: &[String],
    arguments: &mut dyn ArgumentSet,
) -> Result<(), ParseError> {
    let descriptors = arguments.descriptors();
    let mut parser = Parser {
        arguments,
        descriptors,
    };
    parser.parse(args)
}

/// The option an argument resolved to.
struct Matched<'s> {
    descriptor: OptionDescriptor,
    /// Text after `=` when a choice option was spelled `-name=value`
    choice: Option<&'s str>,
}

/// Internal parser state.
struct Parser<'a> {
    arguments: &'a mut dyn ArgumentSet,
    descriptors: Vec<OptionDescriptor>,
}

impl<'a> Parser<'a> {
    fn parse(&mut self, args: &[String]) -> Result<(), ParseError> {
        let mut args_iter = args.iter();

        while let Some(arg) = args_iter.next() {
            let Some(name) = arg.strip_prefix('-') else {
                self.arguments.common_mut().free_args.push(arg.clone());
                continue;
            };

            match self.find(name) {
                Some(matched) => self.assign(matched, arg, &mut args_iter)?,
                None => self.unknown(arg),
            }
        }

        Ok(())
    }

    /// Choice options match on the part before `=`, every other option on
    /// one of its names.
    fn find<'s>(&self, name: &'s str) -> Option<Matched<'s>> {
        let (key, value) = match name.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (name, None),
        };

        self.descriptors.iter().find_map(|descriptor| {
            let choice = if descriptor.is_choice() {
                if descriptor.primary_name() != key {
                    return None;
                }
                value
            } else {
                if !descriptor.is_named(name) {
                    return None;
                }
                None
            };
            Some(Matched {
                descriptor: *descriptor,
                choice,
            })
        })
    }

    fn assign(
        &mut self,
        matched: Matched<'_>,
        arg: &str,
        args_iter: &mut Iter<String>,
    ) -> Result<(), ParseError> {
        let field = matched.descriptor.field;
        let slot = self
            .arguments
            .field_mut(field)
            .ok_or(ParseError::UnboundField(field))?;

        let recognized = match slot {
            ValueMut::Flag(value) => {
                *value = true;
                true
            }
            ValueMut::Text(value) => {
                let next = args_iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                *value = Some(next.clone());
                true
            }
            ValueMut::List(values) => {
                let next = args_iter
                    .next()
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                values.extend(next.split(',').map(str::to_string));
                true
            }
            // A choice without `=value`, or with a value it lacks, is unknown
            ValueMut::Choice(choice) => matched
                .choice
                .is_some_and(|value| choice.select(value)),
        };

        if !recognized {
            self.unknown(arg);
        }
        Ok(())
    }

    fn unknown(&mut self, arg: &str) {
        let common = self.arguments.common_mut();
        let advanced = arg
            .strip_prefix('-')
            .is_some_and(|name| name.starts_with(ADVANCED_PREFIX));
        if advanced {
            debug!(flag = arg, "unknown advanced flag");
            common.unknown_extra_flags.push(arg.to_string());
        } else {
            common.free_args.push(arg.to_string());
        }
    }
}
