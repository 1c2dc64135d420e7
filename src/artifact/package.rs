use super::Artifact;
use crate::{error::ScaffoldError, project::Project};
use serde::Serialize;
use std::collections::BTreeMap;

pub const PATH: &str = "package.json";

const DEPENDENCIES: &[(&str, &str)] = &[
    ("cross-fetch", "^2.2.2"),
    ("luxon", "^1.8.2"),
    ("serverless-simple-middleware", "^0.0.50"),
    ("simple-staging", "^0.0.12"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/luxon", "^1.4.1"),
    ("@types/node", "^14.16.0"),
    ("prettier", "^1.19.1"),
    ("raw-loader", "^4.0.2"),
    ("serverless", "3.22.0"),
    ("serverless-offline", "^10.0.2"),
    ("serverless-prune-plugin", "^2.0.1"),
    ("serverless-webpack", "^5.9.0"),
    ("ts-loader", "^5.3.1"),
    ("typescript", "4.3.5"),
    ("webpack", "^4.27.1"),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest {
    name: String,
    scripts: Scripts,
    dependencies: BTreeMap<&'static str, &'static str>,
    dev_dependencies: BTreeMap<&'static str, &'static str>,
    prettier: Prettier,
    resolutions: BTreeMap<&'static str, &'static str>,
}

/// Declared in this order, which is not alphabetical.
#[derive(Debug, Serialize)]
struct Scripts {
    clean: &'static str,
    start: &'static str,
    deploy: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Prettier {
    print_width: u32,
    single_quote: bool,
    trailing_comma: &'static str,
}

fn manifest(project: &Project) -> Manifest {
    Manifest {
        name: project.name().to_string(),
        scripts: Scripts {
            clean: "rm -rf node_modules && yarn",
            start: "sls offline --host 0.0.0.0 --noTimeout",
            deploy: "SLS_DEBUG=* sls deploy",
        },
        dependencies: DEPENDENCIES.iter().copied().collect(),
        dev_dependencies: DEV_DEPENDENCIES.iter().copied().collect(),
        prettier: Prettier {
            print_width: 80,
            single_quote: true,
            trailing_comma: "all",
        },
        resolutions: vec![("**/graceful-fs", "4.2.8")].into_iter().collect(),
    }
}

pub fn render(project: &Project) -> Result<Artifact, ScaffoldError> {
    let mut json = serde_json::to_string_pretty(&manifest(project))
        .map_err(|source| ScaffoldError::RenderJson { file: PATH, source })?;
    json.push('\n');
    Ok(Artifact::new(PATH, json))
}
