use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{ParamType, Result, ValidationError};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ImagePullPolicy {
    #[default]
    IfNotPresent,
    Always,
    Never,
}

impl ImagePullPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IfNotPresent => "IfNotPresent",
            Self::Always => "Always",
            Self::Never => "Never",
        }
    }
}

impl fmt::Display for ImagePullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImagePullPolicy {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        PullPolicyParam.convert(value, "pull-policy")
    }
}

/// Accepts the policy names in any case, or their first letter.
pub struct PullPolicyParam;

impl ParamType for PullPolicyParam {
    type Value = ImagePullPolicy;

    fn convert(&self, value: &str, param: &str) -> Result<ImagePullPolicy> {
        match value.to_ascii_lowercase().as_str() {
            "ifnotpresent" | "i" => Ok(ImagePullPolicy::IfNotPresent),
            "always" | "a" => Ok(ImagePullPolicy::Always),
            "never" | "n" => Ok(ImagePullPolicy::Never),
            _ => Err(ValidationError::new(
                param,
                format!("Invalid value '{value}'. Choose from IfNotPresent, Always, Never (or i, a, n)"),
            )),
        }
    }
}
