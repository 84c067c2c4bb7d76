//! Endpoint value object - one side of a sync operation
//!
//! Endpoints carry no explicit dialect tag. The dialect is inferred from the
//! lexical shape of the string every time it is needed:
//!
//! - `Local`: a bare filesystem path (`data1`, `/srv/kb`, `C:\kb`)
//! - `UrlRemote`: `scheme://user@host//absolute/path` (unison syntax)
//! - `ColonRemote`: `user@host:/absolute/path` (rsync/ssh syntax)

use serde::Serialize;
use std::fmt;

/// Remote-addressing dialect of an endpoint string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Local,
    UrlRemote,
    ColonRemote,
}

/// A directory tree identifier, exactly as the operator wrote it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn dialect(&self) -> Dialect {
        if split_url_remote(&self.0).is_some() {
            Dialect::UrlRemote
        } else if colon_prefix(&self.0).is_some() {
            Dialect::ColonRemote
        } else {
            Dialect::Local
        }
    }

    /// Endpoint rewritten in the colon dialect understood by the one-way engine
    pub fn to_colon_form(&self) -> Endpoint {
        Endpoint(translate_remote(&self.0))
    }

    /// Endpoint safe to place where an engine expects a positional root
    ///
    /// A path starting with `-` would be read as an option, so it gets a
    /// `./` prefix. URL remotes are left alone; their scheme comes first.
    pub fn as_positional(&self) -> Endpoint {
        if self.0.starts_with('-') && self.dialect() != Dialect::UrlRemote {
            Endpoint(format!("./{}", self.0))
        } else {
            self.clone()
        }
    }

    /// Endpoint string with a trailing separator, as a one-way transfer source
    ///
    /// rsync copies the directory itself when the source lacks a trailing
    /// slash, and only its contents when it has one.
    pub fn as_contents_source(&self) -> String {
        if self.0.ends_with('/') || self.0.ends_with(std::path::MAIN_SEPARATOR) {
            self.0.clone()
        } else {
            format!("{}/", self.0)
        }
    }

    /// Host prefix when a colon-style endpoint might really be a local path
    ///
    /// `backup:2024` has no `user@` and a relative path; rsync will still
    /// contact a host named `backup`.
    pub fn ambiguous_host(&self) -> Option<&str> {
        if split_url_remote(&self.0).is_some() {
            return None;
        }
        let (prefix, path) = colon_prefix(&self.0)?;
        if prefix.contains('@') || path.starts_with('/') || path.starts_with('~') {
            return None;
        }
        Some(prefix)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Endpoint {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Rewrite `scheme://host//path` as `host:/path`; anything else is returned as-is.
pub fn translate_remote(raw: &str) -> String {
    match split_url_remote(raw) {
        Some((host, path)) => format!("{}:/{}", host, path),
        None => raw.to_string(),
    }
}

/// Split `scheme://host//path` into `(host, path)`.
///
/// The double slash before the path marks it absolute on the remote side;
/// `ssh://host/relative` deliberately does not match.
fn split_url_remote(raw: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = raw.split_once("://")?;
    let scheme_ok = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok {
        return None;
    }

    let (host, path) = rest.split_once('/')?;
    if host.is_empty() {
        return None;
    }
    let path = path.strip_prefix('/')?;
    Some((host, path))
}

fn colon_prefix(raw: &str) -> Option<(&str, &str)> {
    let (prefix, path) = raw.split_once(':')?;
    if prefix.is_empty() || prefix.contains('/') || prefix.contains('\\') {
        return None;
    }
    // Drive letter
    if prefix.len() == 1 && prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((prefix, path))
}
