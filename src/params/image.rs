use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{ParamType, Result, ValidationError};

static RE_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<account>\w*)(?:/(?P<image>\w*))?(?::(?P<tag>[\w.-]*))?$")
        .expect("static regex must compile")
});

/// An image reference in the `account[/image[:tag]]` form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DockerImage {
    pub account: String,
    pub image: Option<String>,
    pub tag: Option<String>,
}

impl DockerImage {
    /// Canonical form, built from the components that are present
    pub fn id(&self) -> String {
        match (&self.image, &self.tag) {
            (Some(image), Some(tag)) => format!("{}/{}:{}", self.account, image, tag),
            (Some(image), None) => format!("{}/{}", self.account, image),
            _ => self.account.clone(),
        }
    }

    fn parse(value: &str) -> std::result::Result<Self, &'static str> {
        let caps = RE_IMAGE
            .captures(value)
            .ok_or("Unrecognised image reference")?;
        let part = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let account = part("account").ok_or("Account is required")?;
        let image = part("image");
        let tag = part("tag");
        if tag.is_some() && image.is_none() {
            return Err("Tag needs an image");
        }
        Ok(DockerImage {
            account,
            image,
            tag,
        })
    }
}

impl fmt::Display for DockerImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

pub struct ImageParam;

impl ParamType for ImageParam {
    type Value = DockerImage;

    fn convert(&self, value: &str, param: &str) -> Result<DockerImage> {
        DockerImage::parse(value).map_err(|reason| {
            ValidationError::new(
                param,
                format!("{reason}. Invalid '{value}' Please indicate image in the form 'account[/image[:tag]]'"),
            )
        })
    }
}

impl FromStr for DockerImage {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        ImageParam.convert(value, "image")
    }
}
