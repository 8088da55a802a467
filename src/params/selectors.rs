use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{segments, ParamType, Result, ValidationError};

pub const DEFAULT_WORKLOAD_KIND: &str = "deployment";

/// A workload inside a namespace, given as `namespace:workload`
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub namespace: String,
    pub name: String,
}

/// A workload of a given kind, given as `[kind:]namespace:workload`
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

/// A project of a cluster, given as `clusterId:projectId`
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub cluster_id: String,
    pub project_id: String,
}

pub struct TargetParam;
pub struct WorkloadParam;
pub struct ProjectParam;

impl ParamType for TargetParam {
    type Value = Target;

    fn convert(&self, value: &str, param: &str) -> Result<Target> {
        match segments(value)[..] {
            [namespace, name] => Ok(Target {
                namespace: namespace.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ValidationError::new(
                param,
                format!(
                    "Invalid value '{value}' for TARGET. Please indicate target in the form 'namespace:workload'"
                ),
            )),
        }
    }
}

impl ParamType for WorkloadParam {
    type Value = Workload;

    fn convert(&self, value: &str, param: &str) -> Result<Workload> {
        let (kind, namespace, name) = match segments(value)[..] {
            [namespace, name] => (DEFAULT_WORKLOAD_KIND, namespace, name),
            [kind, namespace, name] => (kind, namespace, name),
            _ => {
                return Err(ValidationError::new(
                    param,
                    format!(
                        "Invalid value '{value}' for TARGET. Please indicate target in the form '[deployment:]namespace:workload'"
                    ),
                ))
            }
        };
        Ok(Workload {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }
}

impl ParamType for ProjectParam {
    type Value = Project;

    fn convert(&self, value: &str, param: &str) -> Result<Project> {
        match segments(value)[..] {
            [cluster_id, project_id] => Ok(Project {
                cluster_id: cluster_id.to_string(),
                project_id: project_id.to_string(),
            }),
            _ => Err(ValidationError::new(
                param,
                format!(
                    "Invalid value '{value}' for PROJECT. Please indicate project in the form 'clusterId:projectID'"
                ),
            )),
        }
    }
}

impl FromStr for Target {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        TargetParam.convert(value, "target")
    }
}

impl FromStr for Workload {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        WorkloadParam.convert(value, "workload")
    }
}

impl FromStr for Project {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        ProjectParam.convert(value, "project")
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.namespace, self.name)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.cluster_id, self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_needs_exactly_two_segments() {
        let target = TargetParam.convert("ns1:web", "target").unwrap();
        assert_eq!(target.namespace, "ns1");
        assert_eq!(target.name, "web");
        assert_eq!(target.to_string(), "ns1:web");

        for value in ["web", "a:b:c", ""] {
            let err = TargetParam.convert(value, "target").unwrap_err();
            assert_eq!(
                err.message(),
                format!("Invalid value '{value}' for TARGET. Please indicate target in the form 'namespace:workload'")
            );
        }
    }

    #[test]
    fn workload_defaults_to_deployment() {
        let workload: Workload = "ns1:web".parse().unwrap();
        assert_eq!(
            workload,
            Workload {
                kind: "deployment".to_string(),
                namespace: "ns1".to_string(),
                name: "web".to_string(),
            }
        );

        let workload: Workload = "statefulset:ns1:db".parse().unwrap();
        assert_eq!(workload.kind, "statefulset");
        assert_eq!(workload.namespace, "ns1");
        assert_eq!(workload.name, "db");
        assert_eq!(workload.to_string(), "statefulset:ns1:db");
    }

    #[test]
    fn workload_rejects_other_segment_counts() {
        for value in ["", "web", "a:b:c:d"] {
            let err = value.parse::<Workload>().unwrap_err();
            assert_eq!(err.param(), "workload");
            assert!(err.message().contains("'[deployment:]namespace:workload'"));
        }
    }

    #[test]
    fn project_needs_exactly_two_segments() {
        let project: Project = "c-abc12:p-xyz34".parse().unwrap();
        assert_eq!(project.cluster_id, "c-abc12");
        assert_eq!(project.project_id, "p-xyz34");
        assert_eq!(project.to_string(), "c-abc12:p-xyz34");

        for value in ["c-abc12", "a:b:c"] {
            let err = value.parse::<Project>().unwrap_err();
            assert_eq!(err.param(), "project");
            assert_eq!(
                err.message(),
                format!("Invalid value '{value}' for PROJECT. Please indicate project in the form 'clusterId:projectID'")
            );
        }
    }
}
