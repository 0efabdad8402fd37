//! compiler-args - Inspect compiler argument schemas from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use compiler_args::{
    parse_command_line_arguments, print, ArgumentSet, CommonArguments, JvmArguments,
};
use serde::Serialize;

/// Inspect compiler argument schemas and their usage text.
#[derive(Parser, Debug)]
#[command(name = "compiler-args", version, about, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Compiler front-end whose arguments to use.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Tool {
    /// Options shared by every front-end (kotlinc)
    Common,
    /// The JVM front-end (kotlinc-jvm)
    Jvm,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the usage text of a front-end
    Help {
        #[arg(long, value_enum, default_value_t = Tool::Jvm)]
        tool: Tool,

        /// List advanced options instead of basic ones
        #[arg(long)]
        advanced: bool,
    },

    /// Parse compiler arguments and print the result as JSON
    Parse {
        #[arg(long, value_enum, default_value_t = Tool::Jvm)]
        tool: Tool,

        /// Arguments to parse for the front-end
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Print the default arguments of a front-end as JSON
    Defaults {
        #[arg(long, value_enum, default_value_t = Tool::Jvm)]
        tool: Tool,
    },

    /// Print the option descriptors of a front-end as JSON
    Describe {
        #[arg(long, value_enum, default_value_t = Tool::Jvm)]
        tool: Tool,
    },
}

/// Parse `args`, then print usage if help was requested, JSON otherwise.
fn parse_and_report<A: ArgumentSet + Serialize>(mut arguments: A, args: &[String]) -> Result<()> {
    parse_command_line_arguments(args, &mut arguments).context("failed to parse arguments")?;

    let common = arguments.common();
    if common.help || common.extra_help {
        let advanced = common.extra_help;
        print(&mut std::io::stdout().lock(), &arguments, advanced)
            .context("failed to print usage")?;
        return Ok(());
    }

    print_json(&arguments)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Help { tool, advanced } => {
            let mut stdout = std::io::stdout().lock();
            let printed = match tool {
                Tool::Common => print(
                    &mut stdout,
                    &CommonArguments::create_default_instance(),
                    advanced,
                ),
                Tool::Jvm => print(
                    &mut stdout,
                    &JvmArguments::create_default_instance(),
                    advanced,
                ),
            };
            printed.context("failed to print usage")?;
        }
        Commands::Parse { tool, args } => match tool {
            Tool::Common => parse_and_report(CommonArguments::create_default_instance(), &args)?,
            Tool::Jvm => parse_and_report(JvmArguments::create_default_instance(), &args)?,
        },
        Commands::Defaults { tool } => match tool {
            Tool::Common => print_json(&CommonArguments::create_default_instance())?,
            Tool::Jvm => print_json(&JvmArguments::create_default_instance())?,
        },
        Commands::Describe { tool } => {
            let descriptors = match tool {
                Tool::Common => CommonArguments::create_default_instance().descriptors(),
                Tool::Jvm => JvmArguments::create_default_instance().descriptors(),
            };
            print_json(descriptors.as_slice())?;
        }
    }

    Ok(())
}
