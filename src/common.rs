//! Options shared by every compiler front-end.

use serde::{Deserialize, Serialize};

use crate::descriptor::{FieldDecl, COROUTINES_GROUP};
use crate::schema::{ArgumentSet, Choice, ValueMut};

/// Value placeholder of the plugin option.
pub const PLUGIN_OPTION_FORMAT: &str = "plugin:<pluginId>:<optionName>=<value>";

/// How declarations and use sites of `suspend` are treated.
///
/// Spelled on the command line as `-Xcoroutines=<mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoroutinesState {
    Enable,
    #[default]
    Warn,
    Error,
}

impl CoroutinesState {
    /// Command-line spellings, in the order usage lists them.
    pub const NAMES: &'static [&'static str] = COROUTINES_GROUP.choices;

    pub fn as_str(self) -> &'static str {
        match self {
            CoroutinesState::Enable => "enable",
            CoroutinesState::Warn => "warn",
            CoroutinesState::Error => "error",
        }
    }

    pub fn from_name(name: &str) -> Option<CoroutinesState> {
        match name {
            "enable" => Some(CoroutinesState::Enable),
            "warn" => Some(CoroutinesState::Warn),
            "error" => Some(CoroutinesState::Error),
            _ => None,
        }
    }
}

impl Choice for CoroutinesState {
    fn select(&mut self, value: &str) -> bool {
        match CoroutinesState::from_name(value) {
            Some(state) => {
                *self = state;
                true
            }
            None => false,
        }
    }
}

const FIELDS: &[FieldDecl] = &[
    FieldDecl::option("language_version", &["language-version"])
        .description("Provide source compatibility with specified language version")
        .value("<version>"),
    FieldDecl::option("api_version", &["api-version"])
        .description("Allow to use declarations only from the specified version of bundled libraries")
        .value("<version>"),
    FieldDecl::option("suppress_warnings", &["nowarn"]).description("Generate no warnings"),
    FieldDecl::option("verbose", &["verbose"]).description("Enable verbose logging output"),
    FieldDecl::option("version", &["version"]).description("Display compiler version"),
    FieldDecl::option("help", &["help", "h"]).description("Print a synopsis of standard options"),
    FieldDecl::option("extra_help", &["X"]).description("Print a synopsis of advanced options"),
    FieldDecl::option("no_inline", &["Xno-inline"]).description("Disable method inlining"),
    FieldDecl::option("repeat", &["Xrepeat"])
        .description("Repeat compilation (for performance analysis)")
        .value("<count>"),
    FieldDecl::option("skip_metadata_version_check", &["Xskip-metadata-version-check"])
        .description("Load classes with bad metadata version anyway (incl. pre-release classes)"),
    FieldDecl::option("allow_kotlin_package", &["Xallow-kotlin-package"])
        .description("Allow compiling code in package 'kotlin'"),
    FieldDecl::option("plugin_classpaths", &["Xplugin"])
        .description("Load plugins from the given classpath")
        .value("<path>"),
    FieldDecl::option("multi_platform", &["Xmulti-platform"])
        .description("Enable experimental language support for multi-platform projects"),
    FieldDecl::option("no_check_impl", &["Xno-check-impl"])
        .description("Do not check presence of 'impl' modifier in multi-platform projects"),
    FieldDecl::option("no_java_version_warning", &["Xskip-java-check"])
        .description("Do not warn when running the compiler under Java 6 or 7"),
    FieldDecl::option("coroutines", &[COROUTINES_GROUP.key])
        .description(COROUTINES_GROUP.description)
        .choices(CoroutinesState::NAMES),
    FieldDecl::option("plugin_options", &["P"])
        .description("Pass an option to a plugin")
        .value(PLUGIN_OPTION_FORMAT),
    FieldDecl::plain("free_args"),
    FieldDecl::plain("unknown_extra_flags"),
];

/// Arguments understood by every compiler front-end (`kotlinc`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonArguments {
    pub language_version: Option<String>,
    pub api_version: Option<String>,
    pub suppress_warnings: bool,
    pub verbose: bool,
    pub version: bool,
    pub help: bool,
    pub extra_help: bool,
    pub no_inline: bool,
    pub repeat: Option<String>,
    pub skip_metadata_version_check: bool,
    pub allow_kotlin_package: bool,
    pub plugin_classpaths: Vec<String>,
    pub multi_platform: bool,
    pub no_check_impl: bool,
    pub no_java_version_warning: bool,
    pub coroutines: CoroutinesState,
    pub plugin_options: Vec<String>,
    /// Positional arguments, usually source files
    pub free_args: Vec<String>,
    /// Advanced flags the parser did not recognize
    pub unknown_extra_flags: Vec<String>,
}

impl CommonArguments {
    /// Arguments with every option at its documented default.
    pub fn create_default_instance() -> Self {
        Self::default()
    }

    pub fn coroutines_enable(&self) -> bool {
        self.coroutines == CoroutinesState::Enable
    }

    pub fn coroutines_warn(&self) -> bool {
        self.coroutines == CoroutinesState::Warn
    }

    pub fn coroutines_error(&self) -> bool {
        self.coroutines == CoroutinesState::Error
    }
}

impl ArgumentSet for CommonArguments {
    fn executable_name(&self) -> &'static str {
        "kotlinc"
    }

    fn declared_fields(&self) -> &'static [FieldDecl] {
        FIELDS
    }

    fn parent(&self) -> Option<&dyn ArgumentSet> {
        None
    }

    fn parent_mut(&mut self) -> Option<&mut dyn ArgumentSet> {
        None
    }

    fn value_mut(&mut self, field: &str) -> Option<ValueMut<'_>> {
        let value = match field {
            "language_version" => ValueMut::Text(&mut self.language_version),
            "api_version" => ValueMut::Text(&mut self.api_version),
            "suppress_warnings" => ValueMut::Flag(&mut self.suppress_warnings),
            "verbose" => ValueMut::Flag(&mut self.verbose),
            "version" => ValueMut::Flag(&mut self.version),
            "help" => ValueMut::Flag(&mut self.help),
            "extra_help" => ValueMut::Flag(&mut self.extra_help),
            "no_inline" => ValueMut::Flag(&mut self.no_inline),
            "repeat" => ValueMut::Text(&mut self.repeat),
            "skip_metadata_version_check" => ValueMut::Flag(&mut self.skip_metadata_version_check),
            "allow_kotlin_package" => ValueMut::Flag(&mut self.allow_kotlin_package),
            "plugin_classpaths" => ValueMut::List(&mut self.plugin_classpaths),
            "multi_platform" => ValueMut::Flag(&mut self.multi_platform),
            "no_check_impl" => ValueMut::Flag(&mut self.no_check_impl),
            "no_java_version_warning" => ValueMut::Flag(&mut self.no_java_version_warning),
            "coroutines" => ValueMut::Choice(&mut self.coroutines),
            "plugin_options" => ValueMut::List(&mut self.plugin_options),
            _ => return None,
        };
        Some(value)
    }

    fn common(&self) -> &CommonArguments {
        self
    }

    fn common_mut(&mut self) -> &mut CommonArguments {
        self
    }
}
