//! Parsers for the raw command line values accepted by lazo.
//!
//! Every stateless parameter kind is a unit struct implementing [`ParamType`].
//! The parsed value types also implement `FromStr`, so clap can use them as
//! value parsers directly. Kinds that need to see the rest of the invocation
//! (verbosity, quiet, debug) go through a [`ParseContext`] instead.
use thiserror::Error;

pub(crate) mod auth;
pub(crate) mod context;
pub(crate) mod image;
pub(crate) mod pull_policy;
pub(crate) mod selectors;
pub(crate) mod url;

pub use self::auth::{AuthParam, Credentials, StdinAuth};
pub use self::context::{DebugMode, ParseContext, Verbosity, QUIET};
pub use self::image::{DockerImage, ImageParam};
pub use self::pull_policy::{ImagePullPolicy, PullPolicyParam};
pub use self::selectors::{Project, ProjectParam, Target, TargetParam, Workload, WorkloadParam};
pub use self::url::{parse_url, UrlParam};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for '{param}': {message}")]
pub struct ValidationError {
    param: String,
    message: String,
}

impl ValidationError {
    pub fn new(param: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter that was rejected
    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// A kind of command line parameter that can turn raw text into a value.
pub trait ParamType {
    type Value;

    /// Converts `value`, given for the parameter called `param`.
    fn convert(&self, value: &str, param: &str) -> Result<Self::Value>;
}

/// Splits a `a:b[:c]` selector into its colon separated segments.
pub(crate) fn segments(value: &str) -> Vec<&str> {
    value.split(':').collect()
}
