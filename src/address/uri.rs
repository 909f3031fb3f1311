use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use tonic::codegen::http::uri;

/// NormalizedUri is the canonical form of a replica's physical endpoint.
///
/// Scheme and host are lowercased and the path always ends with `/`, so
/// `https://Cosmos1` and `https://cosmos1/` are the same endpoint. A query, if any, is kept
/// after the path. Endpoints carrying userinfo are rejected. Equality and ordering are plain
/// string comparisons on the normalized form.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct NormalizedUri(String);

impl NormalizedUri {
    pub fn parse(raw: &str) -> Result<Self, UriError> {
        let parsed: uri::Uri = raw.parse()?;

        let scheme = parsed.scheme_str().ok_or(UriError::MissingScheme)?;
        let authority = parsed.authority().ok_or(UriError::MissingAuthority)?;
        if authority.as_str().contains('@') {
            return Err(UriError::UserInfo);
        }

        let mut normalized = format!(
            "{}://{}",
            scheme.to_ascii_lowercase(),
            authority.host().to_ascii_lowercase()
        );
        if let Some(port) = authority.port_u16() {
            normalized.push_str(&format!(":{}", port));
        }
        normalized.push_str(parsed.path());
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        if let Some(query) = parsed.query() {
            normalized.push('?');
            normalized.push_str(query);
        }

        Ok(NormalizedUri(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NormalizedUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for NormalizedUri {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for NormalizedUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UriError {
    #[error("Invalid endpoint URI: {0}")]
    InvalidUri(#[from] uri::InvalidUri),
    #[error("Endpoint URI has no scheme")]
    MissingScheme,
    #[error("Endpoint URI has no host")]
    MissingAuthority,
    #[error("Endpoint URI must not carry user info")]
    UserInfo,
}
