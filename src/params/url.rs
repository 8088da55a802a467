use log::*;
use url::{ParseError, Url};

use super::{ParamType, Result, ValidationError};

pub struct UrlParam;

impl ParamType for UrlParam {
    type Value = String;

    fn convert(&self, value: &str, param: &str) -> Result<String> {
        let parsed = match Url::parse(value) {
            Ok(url) => Ok(url),
            // Endpoints are often given without a scheme
            Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{value}")),
            Err(err) => Err(err),
        };
        if let Err(err) = parsed {
            debug!("unable to parse url {}: {}", value, err);
            return Err(ValidationError::new(
                param,
                "Invalid url. Should be something like 'https://rancher.example.com:9000/v3'",
            ));
        }
        if value.ends_with('/') {
            return Err(ValidationError::new(param, "Url should not ends with '/'"));
        }
        Ok(value.to_string())
    }
}

/// clap value parser for endpoint urls
pub fn parse_url(value: &str) -> Result<String> {
    UrlParam.convert(value, "url")
}
