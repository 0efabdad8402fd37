use std::collections::HashSet;

use compiler_args::{
    parse_command_line_arguments, print, render, validate_schema, ArgumentSet, CommonArguments,
    CoroutinesState, JvmArguments,
};

const COMMON_BASIC_USAGE: &str = "\
Usage: kotlinc <options> <source files>
where possible options include:
  -language-version <version> Provide source compatibility with specified language version
  -api-version <version>     Allow to use declarations only from the specified version of bundled libraries
  -nowarn                    Generate no warnings
  -verbose                   Enable verbose logging output
  -version                   Display compiler version
  -help (-h)                 Print a synopsis of standard options
  -X                         Print a synopsis of advanced options
  -P plugin:<pluginId>:<optionName>=<value>
                             Pass an option to a plugin
";

const COROUTINES_LINE: &str = "  -Xcoroutines={enable|warn|error} Enable coroutines or report warnings or errors on declarations and use sites of 'suspend' modifier";

/// Primary names of the option lines of a usage text.
fn listed_names(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.strip_prefix("  -"))
        .map(|rest| {
            rest.split(|c: char| c == ' ' || c == '=')
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

#[test]
fn test_common_basic_usage_exact() {
    let text = render(&CommonArguments::create_default_instance(), false).unwrap();
    assert_eq!(text, COMMON_BASIC_USAGE);
}

#[test]
fn test_basic_scenario() {
    let text = render(&CommonArguments::create_default_instance(), false).unwrap();
    assert!(text.contains("  -language-version <version>"));
    assert!(text.lines().any(|line| line.starts_with("  -nowarn ")));
    assert!(!text.contains("-Xno-inline"));
    assert!(!text.contains("Xcoroutines"));
}

#[test]
fn test_advanced_scenario() {
    let text = render(&CommonArguments::create_default_instance(), true).unwrap();
    assert!(text.lines().any(|line| line.starts_with("  -Xno-inline ")));
    assert!(text.contains("Xcoroutines={enable|warn|error}"));
    assert!(!text.contains("-language-version"));
    assert!(text.starts_with(
        "Usage: kotlinc <options> <source files>\nwhere advanced options include:\n"
    ));
    assert!(text.ends_with(
        "\n\nAdvanced options are non-standard and may be changed or removed without any notice.\n"
    ));
}

#[test]
fn test_coroutines_listed_once() {
    for text in [
        render(&CommonArguments::create_default_instance(), true).unwrap(),
        render(&JvmArguments::create_default_instance(), true).unwrap(),
    ] {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| line.contains("Xcoroutines"))
            .collect();
        assert_eq!(lines, vec![COROUTINES_LINE]);
    }
}

#[test]
fn test_coroutines_line_independent_of_state() {
    let mut arguments = CommonArguments::create_default_instance();
    let default_text = render(&arguments, true).unwrap();

    for state in [
        CoroutinesState::Enable,
        CoroutinesState::Warn,
        CoroutinesState::Error,
    ] {
        arguments.coroutines = state;
        assert_eq!(render(&arguments, true).unwrap(), default_text);
    }
}

#[test]
fn test_render_is_idempotent() {
    let arguments = JvmArguments::create_default_instance();
    for advanced in [false, true] {
        assert_eq!(
            render(&arguments, advanced).unwrap(),
            render(&arguments, advanced).unwrap()
        );
    }
}

#[test]
fn test_tiers_cover_every_option_once() {
    let arguments = JvmArguments::create_default_instance();

    let mut listed = listed_names(&render(&arguments, false).unwrap());
    listed.extend(listed_names(&render(&arguments, true).unwrap()));
    let unique: HashSet<&String> = listed.iter().collect();
    assert_eq!(unique.len(), listed.len());

    let mut declared: Vec<String> = arguments
        .descriptors()
        .iter()
        .map(|descriptor| descriptor.group_key().to_string())
        .collect();

    listed.sort();
    declared.sort();
    assert_eq!(listed, declared);
}

#[test]
fn test_descriptions_aligned() {
    let continuation = " ".repeat(29);
    let arguments = JvmArguments::create_default_instance();

    for advanced in [false, true] {
        let text = render(&arguments, advanced).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        for (index, line) in lines.iter().enumerate() {
            if line.starts_with("  -") {
                let wrapped = lines
                    .get(index + 1)
                    .is_some_and(|next| next.starts_with(&continuation));
                if wrapped || line.contains("Xcoroutines") {
                    continue;
                }
                // Prefixes slightly wider than the column keep one space
                if &line[27..29] != "  " {
                    continue;
                }
                assert_ne!(&line[29..30], " ", "line: {:?}", line);
            } else if line.starts_with(' ') {
                assert_eq!(line.find(|c: char| c != ' '), Some(29), "line: {:?}", line);
            }
        }
    }
}

#[test]
fn test_jvm_lists_own_options_before_common() {
    let arguments = JvmArguments::create_default_instance();
    let text = render(&arguments, false).unwrap();
    assert!(text.starts_with("Usage: kotlinc-jvm <options> <source files>\n"));

    let names = listed_names(&text);
    assert_eq!(names.first().map(String::as_str), Some("d"));
    let java_parameters = names.iter().position(|name| name == "java-parameters").unwrap();
    let language_version = names.iter().position(|name| name == "language-version").unwrap();
    assert_eq!(language_version, java_parameters + 1);

    let common_text = render(&CommonArguments::create_default_instance(), false).unwrap();
    let common_names = listed_names(&common_text);
    assert_eq!(names[language_version..], common_names[..]);
}

#[test]
fn test_jvm_advanced_wraps_long_names() {
    let text = render(&JvmArguments::create_default_instance(), true).unwrap();
    assert!(text.contains(
        "  -Xload-builtins-from-dependencies\n                             Load definitions of built-in declarations from module dependencies, instead of from the compiler\n"
    ));
    assert!(text.contains("  -Xno-optimize              Disable optimizations\n"));
}

#[test]
fn test_render_does_not_mutate_arguments() {
    let mut arguments = JvmArguments::create_default_instance();
    let args: Vec<String> = ["-cp", "lib.jar", "-Xfoo", "main.kt"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    parse_command_line_arguments(&args, &mut arguments).unwrap();

    let before = arguments.clone();
    let mut sink = Vec::new();
    print(&mut sink, &arguments, false).unwrap();
    print(&mut sink, &arguments, true).unwrap();

    assert_eq!(arguments, before);
    assert_eq!(arguments.free_args(), ["main.kt"]);
    assert_eq!(arguments.unknown_extra_flags(), ["-Xfoo"]);
}

#[test]
fn test_shipped_schemas_are_valid() {
    validate_schema(&CommonArguments::create_default_instance()).unwrap();
    validate_schema(&JvmArguments::create_default_instance()).unwrap();
}
