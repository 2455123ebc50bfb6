//! The immutable, validated diagnostic record and its text formats.

use std::fmt;
use std::str::FromStr;

use quill_span::SourceLocation;

use crate::{DiagnosticError, FormatError, Severity};

/// Output convention for [`DiagnosticMessage`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticFormat {
    /// Build-tool form (`"M"`):
    /// `{origin}{range} : {subcategory} {level} {code} : {text}`.
    Msbuild,
    /// Runtime-appropriate default (`"G"`).
    General,
}

impl DiagnosticFormat {
    /// Convention that [`DiagnosticFormat::General`] resolves to on the
    /// current platform.
    pub const fn platform_default() -> DiagnosticFormat {
        DiagnosticFormat::Msbuild
    }

    /// Resolve `General` to the concrete platform convention.
    pub const fn resolve(self) -> DiagnosticFormat {
        match self {
            DiagnosticFormat::General => Self::platform_default(),
            concrete => concrete,
        }
    }
}

impl FromStr for DiagnosticFormat {
    type Err = FormatError;

    /// `"M"` and `"G"`; the empty string means `"G"`.
    fn from_str(s: &str) -> Result<Self, FormatError> {
        match s {
            "M" => Ok(DiagnosticFormat::Msbuild),
            "G" | "" => Ok(DiagnosticFormat::General),
            other => Err(FormatError::UnknownSpecifier(other.to_owned())),
        }
    }
}

/// A user-facing diagnostic: location, severity, code, subcategory and text.
///
/// Validated at construction and immutable afterwards.
///
/// # Example
///
/// ```text
/// C:\MyOrigin.txt(1, 2, 2, 1) : Subcategory Verbose CODE1 : This is a test message
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticMessage {
    location: SourceLocation,
    level: Severity,
    code: Option<String>,
    subcategory: Option<String>,
    text: String,
}

impl DiagnosticMessage {
    /// Start building a message. Validation happens in
    /// [`DiagnosticMessageBuilder::build`].
    pub fn builder(level: Severity, text: impl Into<String>) -> DiagnosticMessageBuilder {
        DiagnosticMessageBuilder {
            location: SourceLocation::default(),
            level,
            code: None,
            subcategory: None,
            text: text.into(),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.level == Severity::Error
    }

    /// Render in the given convention.
    pub fn render(&self, format: DiagnosticFormat) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_format(&mut out, format);
        out
    }

    /// Render with a format specifier (`"M"`, `"G"`).
    pub fn to_string_with(&self, specifier: &str) -> Result<String, FormatError> {
        let format = specifier.parse::<DiagnosticFormat>()?;
        Ok(self.render(format))
    }

    fn write_format(&self, f: &mut impl fmt::Write, format: DiagnosticFormat) -> fmt::Result {
        match format.resolve() {
            DiagnosticFormat::Msbuild | DiagnosticFormat::General => self.write_msbuild(f),
        }
    }

    /// Without a meaningful origin the build-tool form degrades to the
    /// bare text. Empty code or subcategory tokens are omitted like absent
    /// ones.
    fn write_msbuild(&self, f: &mut impl fmt::Write) -> fmt::Result {
        let Some(origin) = self.location.origin() else {
            return f.write_str(&self.text);
        };

        write!(f, "{origin}{} : ", self.location.range)?;
        if let Some(subcategory) = self.subcategory().filter(|s| !s.is_empty()) {
            write!(f, "{subcategory} ")?;
        }
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code().filter(|c| !c.is_empty()) {
            write!(f, " {code}")?;
        }
        write!(f, " : {}", self.text)
    }
}

/// `{}` renders the `"G"` convention.
impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_format(f, DiagnosticFormat::General)
    }
}

/// Builder for [`DiagnosticMessage`].
#[derive(Clone, Debug)]
#[must_use]
pub struct DiagnosticMessageBuilder {
    location: SourceLocation,
    level: Severity,
    code: Option<String>,
    subcategory: Option<String>,
    text: String,
}

impl DiagnosticMessageBuilder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// Validate and build.
    ///
    /// Fails if the level is [`Severity::None`], the text is blank, or the
    /// code or subcategory contain whitespace.
    pub fn build(self) -> Result<DiagnosticMessage, DiagnosticError> {
        if self.level == Severity::None {
            return Err(DiagnosticError::NoneSeverity);
        }
        if self.text.trim().is_empty() {
            return Err(DiagnosticError::BlankText);
        }
        if let Some(code) = self.code.as_ref().filter(|c| has_whitespace(c)) {
            return Err(DiagnosticError::WhitespaceInCode(code.clone()));
        }
        if let Some(sub) = self.subcategory.as_ref().filter(|s| has_whitespace(s)) {
            return Err(DiagnosticError::WhitespaceInSubcategory(sub.clone()));
        }

        Ok(DiagnosticMessage {
            location: self.location,
            level: self.level,
            code: self.code,
            subcategory: self.subcategory,
            text: self.text,
        })
    }
}

fn has_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}
