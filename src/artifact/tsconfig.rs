use super::Artifact;
use crate::error::ScaffoldError;
use serde::Serialize;

pub const PATH: &str = "tsconfig.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
    compiler_options: CompilerOptions,
    exclude: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    source_map: bool,
    target: &'static str,
    out_dir: &'static str,
    module_resolution: &'static str,
    lib: Vec<&'static str>,
    preserve_const_enums: bool,
    force_consistent_casing_in_file_names: bool,
    no_implicit_returns: bool,
    no_implicit_this: bool,
    no_implicit_any: bool,
    strict_null_checks: bool,
    suppress_implicit_any_index_errors: bool,
    no_unused_locals: bool,
    allow_synthetic_default_imports: bool,
    downlevel_iteration: bool,
    resolve_json_module: bool,
}

fn tsconfig() -> TsConfig {
    TsConfig {
        compiler_options: CompilerOptions {
            source_map: true,
            target: "es5",
            out_dir: ".build",
            module_resolution: "node",
            lib: vec!["es2015", "esnext", "dom"],
            preserve_const_enums: true,
            force_consistent_casing_in_file_names: true,
            no_implicit_returns: true,
            no_implicit_this: true,
            no_implicit_any: true,
            strict_null_checks: true,
            suppress_implicit_any_index_errors: true,
            no_unused_locals: true,
            allow_synthetic_default_imports: true,
            downlevel_iteration: true,
            resolve_json_module: true,
        },
        exclude: vec!["node_modules/**/*", ".build/"],
    }
}

pub fn render() -> Result<Artifact, ScaffoldError> {
    let mut json = serde_json::to_string_pretty(&tsconfig())
        .map_err(|source| ScaffoldError::RenderJson { file: PATH, source })?;
    json.push('\n');
    Ok(Artifact::new(PATH, json))
}
