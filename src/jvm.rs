//! Options of the JVM compiler front-end.

use serde::{Deserialize, Serialize};

use crate::common::CommonArguments;
use crate::descriptor::FieldDecl;
use crate::schema::{ArgumentSet, ValueMut};

/// Bytecode target used when none is given.
pub const DEFAULT_JVM_TARGET: &str = "1.6";

const FIELDS: &[FieldDecl] = &[
    FieldDecl::option("destination", &["d"])
        .description("Destination for generated class files")
        .value("<directory|jar>"),
    FieldDecl::option("classpath", &["classpath", "cp"])
        .description("Paths where to find user class files")
        .value("<path>"),
    FieldDecl::option("include_runtime", &["include-runtime"])
        .description("Include Kotlin runtime in to resulting .jar"),
    FieldDecl::option("jdk_home", &["jdk-home"])
        .description("Path to JDK home directory to include into classpath, if differs from default JAVA_HOME")
        .value("<path>"),
    FieldDecl::option("no_jdk", &["no-jdk"]).description("Don't include Java runtime into classpath"),
    FieldDecl::option("no_stdlib", &["no-stdlib"])
        .description("Don't include Kotlin runtime into classpath"),
    FieldDecl::option("no_reflect", &["no-reflect"])
        .description("Don't include Kotlin reflection implementation into classpath"),
    FieldDecl::option("module", &["module"])
        .description("Path to the module file to compile")
        .value("<path>"),
    FieldDecl::option("script", &["script"]).description("Evaluate the script file"),
    FieldDecl::option("script_templates", &["script-templates"])
        .description("Script definition template classes")
        .value("<fully qualified class name[,]>"),
    FieldDecl::option("kotlin_home", &["kotlin-home"])
        .description("Path to Kotlin compiler home directory, used for runtime libraries discovery")
        .value("<path>"),
    FieldDecl::option("module_name", &["module-name"]).description("Module name"),
    FieldDecl::option("jvm_target", &["jvm-target"])
        .description("Target version of the generated JVM bytecode (1.6 or 1.8), default is 1.6")
        .value("<version>"),
    FieldDecl::option("java_parameters", &["java-parameters"])
        .description("Generate metadata for Java 1.8 reflection on method parameters"),
    // Advanced options
    FieldDecl::option("no_call_assertions", &["Xno-call-assertions"])
        .description("Don't generate not-null assertion after each invocation of method returning not-null"),
    FieldDecl::option("no_param_assertions", &["Xno-param-assertions"])
        .description("Don't generate not-null assertions on parameters of methods accessible from Java"),
    FieldDecl::option("no_optimize", &["Xno-optimize"]).description("Disable optimizations"),
    FieldDecl::option("report_perf", &["Xreport-perf"])
        .description("Report detailed performance statistics"),
    FieldDecl::option("inherit_multifile_parts", &["Xmultifile-parts-inherit"])
        .description("Compile multifile classes as a hierarchy of parts and facade"),
    FieldDecl::option("skip_runtime_version_check", &["Xskip-runtime-version-check"])
        .description("Allow Kotlin runtime libraries of incompatible versions in the classpath"),
    FieldDecl::option("declarations_output_path", &["Xdump-declarations-to"])
        .description("Path to JSON file to dump Java to Kotlin declaration mappings")
        .value("<path>"),
    FieldDecl::option("single_module", &["Xsingle-module"])
        .description("Combine modules for source files and binary dependencies into a single module"),
    FieldDecl::option("add_compiler_builtins", &["Xadd-compiler-builtins"])
        .description("Add definitions of built-in declarations to the compilation classpath (useful with -no-stdlib)"),
    FieldDecl::option("load_builtins_from_dependencies", &["Xload-builtins-from-dependencies"])
        .description("Load definitions of built-in declarations from module dependencies, instead of from the compiler"),
    FieldDecl::plain("friend_paths"),
];

/// Arguments of the JVM front-end (`kotlinc-jvm`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JvmArguments {
    #[serde(flatten)]
    pub common: CommonArguments,
    pub destination: Option<String>,
    pub classpath: Option<String>,
    pub include_runtime: bool,
    pub jdk_home: Option<String>,
    pub no_jdk: bool,
    pub no_stdlib: bool,
    pub no_reflect: bool,
    pub module: Option<String>,
    pub script: bool,
    pub script_templates: Vec<String>,
    pub kotlin_home: Option<String>,
    pub module_name: Option<String>,
    pub jvm_target: Option<String>,
    pub java_parameters: bool,
    pub no_call_assertions: bool,
    pub no_param_assertions: bool,
    pub no_optimize: bool,
    pub report_perf: bool,
    pub inherit_multifile_parts: bool,
    pub skip_runtime_version_check: bool,
    pub declarations_output_path: Option<String>,
    pub single_module: bool,
    pub add_compiler_builtins: bool,
    pub load_builtins_from_dependencies: bool,
    /// Output directories of friend modules, set by build tools
    pub friend_paths: Vec<String>,
}

impl JvmArguments {
    /// Arguments with every option at its documented default.
    pub fn create_default_instance() -> Self {
        Self {
            jvm_target: Some(DEFAULT_JVM_TARGET.to_string()),
            ..Self::default()
        }
    }
}

impl ArgumentSet for JvmArguments {
    fn executable_name(&self) -> &'static str {
        "kotlinc-jvm"
    }

    fn declared_fields(&self) -> &'static [FieldDecl] {
        FIELDS
    }

    fn parent(&self) -> Option<&dyn ArgumentSet> {
        Some(&self.common)
    }

    fn parent_mut(&mut self) -> Option<&mut dyn ArgumentSet> {
        Some(&mut self.common)
    }

    fn value_mut(&mut self, field: &str) -> Option<ValueMut<'_>> {
        let value = match field {
            "destination" => ValueMut::Text(&mut self.destination),
            "classpath" => ValueMut::Text(&mut self.classpath),
            "include_runtime" => ValueMut::Flag(&mut self.include_runtime),
            "jdk_home" => ValueMut::Text(&mut self.jdk_home),
            "no_jdk" => ValueMut::Flag(&mut self.no_jdk),
            "no_stdlib" => ValueMut::Flag(&mut self.no_stdlib),
            "no_reflect" => ValueMut::Flag(&mut self.no_reflect),
            "module" => ValueMut::Text(&mut self.module),
            "script" => ValueMut::Flag(&mut self.script),
            "script_templates" => ValueMut::List(&mut self.script_templates),
            "kotlin_home" => ValueMut::Text(&mut self.kotlin_home),
            "module_name" => ValueMut::Text(&mut self.module_name),
            "jvm_target" => ValueMut::Text(&mut self.jvm_target),
            "java_parameters" => ValueMut::Flag(&mut self.java_parameters),
            "no_call_assertions" => ValueMut::Flag(&mut self.no_call_assertions),
            "no_param_assertions" => ValueMut::Flag(&mut self.no_param_assertions),
            "no_optimize" => ValueMut::Flag(&mut self.no_optimize),
            "report_perf" => ValueMut::Flag(&mut self.report_perf),
            "inherit_multifile_parts" => ValueMut::Flag(&mut self.inherit_multifile_parts),
            "skip_runtime_version_check" => ValueMut::Flag(&mut self.skip_runtime_version_check),
            "declarations_output_path" => ValueMut::Text(&mut self.declarations_output_path),
            "single_module" => ValueMut::Flag(&mut self.single_module),
            "add_compiler_builtins" => ValueMut::Flag(&mut self.add_compiler_builtins),
            "load_builtins_from_dependencies" => {
                ValueMut::Flag(&mut self.load_builtins_from_dependencies)
            }
            _ => return None,
        };
        Some(value)
    }

    fn common(&self) -> &CommonArguments {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonArguments {
        &mut self.common
    }
}
