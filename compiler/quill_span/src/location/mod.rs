//! Ranges inside an identified source.

use std::fmt;
use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::SourceRange;

/// Error when parsing a [`SourceId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceIdError {
    /// The identifier string was empty.
    #[error("source identifier is empty")]
    Empty,
}

/// Identifies the document a location belongs to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SourceId {
    /// A local file (plain path or `file://` URI).
    File(PathBuf),
    /// Any other URI, kept in string form.
    Uri(String),
}

impl SourceId {
    /// Parse a path or URI.
    ///
    /// `file:` URIs (scheme matched case-insensitively), drive-letter paths
    /// (`C:/x`) and plain paths become [`SourceId::File`]. Strings carrying a
    /// URI scheme of two or more characters become [`SourceId::Uri`].
    pub fn parse(text: &str) -> Result<Self, SourceIdError> {
        if text.is_empty() {
            return Err(SourceIdError::Empty);
        }

        if let Some(rest) = strip_file_scheme(text) {
            return Ok(SourceId::File(file_uri_path(rest)));
        }

        if has_drive_letter(text) || !has_scheme(text) {
            return Ok(SourceId::File(PathBuf::from(text)));
        }

        Ok(SourceId::Uri(text.to_owned()))
    }

    /// Origin string used by build-tool output.
    ///
    /// Files render as a local path with separators normalized to the host
    /// platform; other URIs render verbatim.
    pub fn origin(&self) -> String {
        match self {
            SourceId::File(path) => path
                .to_string_lossy()
                .chars()
                .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
                .collect(),
            SourceId::Uri(uri) => uri.clone(),
        }
    }
}

impl From<PathBuf> for SourceId {
    fn from(path: PathBuf) -> Self {
        SourceId::File(path)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin())
    }
}

fn has_drive_letter(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn has_scheme(text: &str) -> bool {
    let Some((scheme, _)) = text.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    scheme.len() >= 2
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// The part of `text` after a `file:` scheme, if it has one.
fn strip_file_scheme(text: &str) -> Option<&str> {
    let scheme = text.get(..5)?;
    scheme.eq_ignore_ascii_case("file:").then(|| &text[5..])
}

/// Local path named by the part of a `file:` URI after the scheme.
///
/// An empty or `localhost` authority names a local path. Any other host is
/// kept as a UNC path (`//server/share/a.ql`).
fn file_uri_path(rest: &str) -> PathBuf {
    let path = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let (host, path) = match authority_and_path.find('/') {
                Some(slash) => authority_and_path.split_at(slash),
                None => (authority_and_path, ""),
            };
            if host.is_empty() || host.eq_ignore_ascii_case("localhost") {
                percent_decode(path)
            } else {
                format!("//{}{}", percent_decode(host), percent_decode(path))
            }
        }
        None => percent_decode(rest),
    };
    // file:///C:/x names the drive path C:/x
    if path.starts_with('/') && has_drive_letter(&path[1..]) {
        PathBuf::from(&path[1..])
    } else {
        PathBuf::from(path)
    }
}

/// Decode `%XX` escapes. Malformed escapes are kept literally.
fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(value) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(value);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// A [`SourceRange`] plus the document it belongs to.
///
/// `source == None` means "no file": the range is only meaningful relative
/// to whatever stream it was produced from.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceLocation {
    pub source: Option<SourceId>,
    pub range: SourceRange,
}

impl SourceLocation {
    /// Create a location inside `source`.
    pub fn new(source: SourceId, range: SourceRange) -> Self {
        SourceLocation {
            source: Some(source),
            range,
        }
    }

    /// Create a location with no source.
    pub const fn unsourced(range: SourceRange) -> Self {
        SourceLocation {
            source: None,
            range,
        }
    }

    /// Origin string, if the source has one.
    pub fn origin(&self) -> Option<String> {
        self.source
            .as_ref()
            .map(SourceId::origin)
            .filter(|origin| !origin.is_empty())
    }

    /// Check if the location names a non-empty origin.
    pub fn has_origin(&self) -> bool {
        self.origin().is_some()
    }

    /// Compose a location relative to `base` into an absolute one.
    ///
    /// The result always carries `base.source`; the relative operand's
    /// source is discarded.
    #[must_use]
    pub fn offset(base: &SourceLocation, relative: &SourceLocation) -> SourceLocation {
        SourceLocation {
            source: base.source.clone(),
            range: SourceRange::offset(base.range, relative.range),
        }
    }
}

impl From<SourceRange> for SourceLocation {
    fn from(range: SourceRange) -> Self {
        SourceLocation::unsourced(range)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(origin) = self.origin() {
            f.write_str(&origin)?;
        }
        write!(f, "{}", self.range)
    }
}
