use clap::ValueEnum;
use k8s_openapi::api::{
    apps::v1::{Deployment, DeploymentSpec},
    core::v1::{Container, PodSpec, PodTemplateSpec},
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use log::*;
use serde::Serialize;

use crate::params::{Credentials, DockerImage, ImagePullPolicy, Project, Target, Workload};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Everything the Rancher client needs to upgrade a workload.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePlan {
    pub method: &'static str,
    pub endpoint: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub authorization: String,
    pub project: String,
    pub workload: Workload,
    pub image: String,
    pub image_pull_policy: ImagePullPolicy,
}

pub fn prepare_upgrade_plan(
    url: &str,
    project: &Project,
    workload: &Workload,
    image: &DockerImage,
    pull_policy: ImagePullPolicy,
    credentials: &Credentials,
) -> UpgradePlan {
    let endpoint = format!("{}/project/{}/workloads/{}", url, project, workload);
    debug!("upgrade endpoint is {}", endpoint);
    UpgradePlan {
        method: "PUT",
        endpoint,
        user: credentials.key.clone(),
        authorization: credentials.authorization(),
        project: project.to_string(),
        workload: workload.clone(),
        image: image.id(),
        image_pull_policy: pull_policy,
    }
}

/// Deployment patch that only swaps the image of one container.
pub fn prepare_deployment_patch(
    target: &Target,
    container: &str,
    image: &DockerImage,
    pull_policy: ImagePullPolicy,
) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(target.name.clone()),
            namespace: Some(target.namespace.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            template: PodTemplateSpec {
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: container.to_string(),
                        image: Some(image.id()),
                        image_pull_policy: Some(pull_policy.to_string()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Yaml => format!("---\n{}", serde_yaml::to_string(value)?),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
    };
    Ok(out)
}
