use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::{segments, ParamType, Result, ValidationError};

/// API key pair used for HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    /// Value of the `Authorization` header for these credentials
    pub fn authorization(&self) -> String {
        let pair = format!("{}:{}", self.key, self.secret);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

// Keep the secret out of logs and panics
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .finish()
    }
}

pub struct AuthParam;

impl ParamType for AuthParam {
    type Value = Credentials;

    fn convert(&self, value: &str, param: &str) -> Result<Credentials> {
        match segments(value)[..] {
            [key, secret] => Ok(Credentials {
                key: key.to_string(),
                secret: secret.to_string(),
            }),
            _ => Err(ValidationError::new(
                param,
                "Please indicate credentials as 'key:secret'",
            )),
        }
    }
}

impl FromStr for Credentials {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self> {
        AuthParam.convert(value, "auth")
    }
}

/// Reads `key:secret` from the first line of a reader, usually stdin.
pub struct StdinAuth;

impl StdinAuth {
    pub fn read<R: BufRead>(&self, mut reader: R) -> Result<Credentials> {
        let mut line = String::new();
        reader.read_line(&mut line).map_err(|err| {
            ValidationError::new("stdin", format!("Unable to read credentials: {err}"))
        })?;
        AuthParam.convert(line.trim_end_matches(['\r', '\n']), "stdin")
    }
}
