//! Reporting levels.

use std::fmt;

use crate::DiagnosticError;

/// Severity level for diagnostics, ordered from quietest to loudest.
///
/// [`Severity::None`] is the "unset" value. It orders below every real
/// level and is rejected when constructing a message.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(u8)]
pub enum Severity {
    #[default]
    None = 0,
    Verbose = 1,
    Information = 2,
    Warning = 3,
    Error = 4,
}

impl Severity {
    /// All levels that a message may carry.
    pub const REPORTABLE: [Severity; 4] = [
        Severity::Verbose,
        Severity::Information,
        Severity::Warning,
        Severity::Error,
    ];

    /// Name used in build-tool output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Verbose => "Verbose",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = DiagnosticError;

    fn try_from(value: u8) -> Result<Self, DiagnosticError> {
        match value {
            0 => Ok(Severity::None),
            1 => Ok(Severity::Verbose),
            2 => Ok(Severity::Information),
            3 => Ok(Severity::Warning),
            4 => Ok(Severity::Error),
            other => Err(DiagnosticError::UndefinedSeverity(other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
