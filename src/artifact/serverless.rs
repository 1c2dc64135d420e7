//! The Serverless Framework deployment descriptor, `serverless.yml`.
//!
//! The descriptor is modelled field by field and serialized with
//! `serde_yaml`, so the project name can never break the document's
//! structure.

use super::Artifact;
use crate::{error::ScaffoldError, project::Project};
use serde::Serialize;
use std::collections::BTreeMap;

pub const PATH: &str = "serverless.yml";

/// Resolved by the Serverless Framework at deploy time, not here.
const STAGE_FROM_ENV: &str = "${env:STAGE}";
const REGION: &str = "ap-northeast-2";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Descriptor {
    service: String,
    provider: Provider,
    custom: Custom,
    plugins: Vec<&'static str>,
    functions: BTreeMap<&'static str, Function>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Provider {
    name: &'static str,
    runtime: &'static str,
    version_functions: bool,
    stage: &'static str,
    region: &'static str,
    iam_role_statements: Vec<IamStatement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct IamStatement {
    effect: &'static str,
    action: Vec<&'static str>,
    resource: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Custom {
    prune: Prune,
    #[serde(rename = "serverless-offline")]
    serverless_offline: Offline,
    log_retention_in_days: u32,
}

#[derive(Debug, Serialize)]
struct Prune {
    automatic: bool,
    number: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offline {
    no_prepend_stage_in_url: bool,
    lambda_port: Option<u16>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Function {
    handler: &'static str,
    memory_size: u32,
    timeout: u32,
    events: Vec<Event>,
    environment: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
struct Event {
    http: HttpEvent,
}

#[derive(Debug, Serialize)]
struct HttpEvent {
    path: &'static str,
    method: &'static str,
    cors: Cors,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Cors {
    origin: &'static str,
    headers: Vec<&'static str>,
    allow_credentials: bool,
}

fn hello_world() -> Function {
    let mut environment = BTreeMap::new();
    environment.insert("STAGE", STAGE_FROM_ENV);

    Function {
        handler: "src/handler.helloWorld",
        memory_size: 128,
        timeout: 3,
        events: vec![Event {
            http: HttpEvent {
                path: "hello-world",
                method: "get",
                cors: Cors {
                    origin: "*",
                    headers: vec!["Content-Type", "Content-Length", "X-Version"],
                    allow_credentials: true,
                },
            },
        }],
        environment,
    }
}

fn descriptor(project: &Project) -> Descriptor {
    let mut functions = BTreeMap::new();
    functions.insert("helloWorld", hello_world());

    Descriptor {
        service: project.name().to_string(),
        provider: Provider {
            name: "aws",
            runtime: "nodejs16.x",
            version_functions: false,
            stage: STAGE_FROM_ENV,
            region: REGION,
            iam_role_statements: vec![IamStatement {
                effect: "Allow",
                action: vec!["s3:*", "sqs:*"],
                resource: "*",
            }],
        },
        custom: Custom {
            prune: Prune {
                automatic: true,
                number: 30,
            },
            serverless_offline: Offline {
                no_prepend_stage_in_url: true,
                lambda_port: None,
            },
            log_retention_in_days: 14,
        },
        plugins: vec![
            "serverless-webpack",
            "serverless-offline",
            "serverless-prune-plugin",
        ],
        functions,
    }
}

pub fn render(project: &Project) -> Result<Artifact, ScaffoldError> {
    let yaml = serde_yaml::to_string(&descriptor(project))
        .map_err(|source| ScaffoldError::RenderYaml { file: PATH, source })?;
    Ok(Artifact::new(PATH, yaml))
}
