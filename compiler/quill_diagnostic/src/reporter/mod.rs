//! Reporting sinks.
//!
//! The core only needs [`DiagnosticReporter`]; concrete console or editor
//! sinks live with the front ends. The reporters here cover in-memory
//! collection, error tracking for exit codes, and forwarding to `tracing`.

use crate::{DiagnosticMessage, ReportError, Severity};

/// A sink for diagnostic messages.
pub trait DiagnosticReporter {
    /// Minimum level this reporter accepts.
    fn level(&self) -> Severity;

    /// Report a message. Errors come from the sink itself and are
    /// propagated unchanged by callers.
    fn report(&mut self, message: DiagnosticMessage) -> Result<(), ReportError>;

    /// Check whether messages at `level` would be accepted.
    fn is_enabled(&self, level: Severity) -> bool {
        level >= self.level()
    }

    /// Report a message only if `level` is enabled, building it lazily.
    ///
    /// Returns whether the message was built and reported.
    fn report_lazy<F>(&mut self, level: Severity, build: F) -> Result<bool, ReportError>
    where
        Self: Sized,
        F: FnOnce() -> DiagnosticMessage,
    {
        if !self.is_enabled(level) {
            return Ok(false);
        }
        self.report(build())?;
        Ok(true)
    }
}

/// Check whether `reporter` accepts messages at `level`.
///
/// Callers should skip building expensive messages when this is `false`.
pub fn is_enabled<R: DiagnosticReporter + ?Sized>(reporter: &R, level: Severity) -> bool {
    reporter.is_enabled(level)
}

impl<R: DiagnosticReporter + ?Sized> DiagnosticReporter for &mut R {
    fn level(&self) -> Severity {
        (**self).level()
    }

    fn report(&mut self, message: DiagnosticMessage) -> Result<(), ReportError> {
        (**self).report(message)
    }
}

/// Collects messages in memory, in report order.
#[derive(Clone, Debug, Default)]
pub struct CollectingReporter {
    level: Severity,
    messages: Vec<DiagnosticMessage>,
}

impl CollectingReporter {
    /// Accept every level.
    pub fn new() -> Self {
        Self::with_level(Severity::Verbose)
    }

    pub fn with_level(level: Severity) -> Self {
        CollectingReporter {
            level,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[DiagnosticMessage] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<DiagnosticMessage> {
        self.messages
    }
}

impl DiagnosticReporter for CollectingReporter {
    fn level(&self) -> Severity {
        self.level
    }

    fn report(&mut self, message: DiagnosticMessage) -> Result<(), ReportError> {
        if self.is_enabled(message.level()) {
            self.messages.push(message);
        }
        Ok(())
    }
}

/// Wraps a reporter and counts the errors and warnings passing through it.
///
/// Front ends use the counts to decide the process exit code.
#[derive(Clone, Debug, Default)]
pub struct ErrorTrackingReporter<R> {
    inner: R,
    error_count: usize,
    warning_count: usize,
}

impl<R: DiagnosticReporter> ErrorTrackingReporter<R> {
    pub fn new(inner: R) -> Self {
        ErrorTrackingReporter {
            inner,
            error_count: 0,
            warning_count: 0,
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: DiagnosticReporter> DiagnosticReporter for ErrorTrackingReporter<R> {
    fn level(&self) -> Severity {
        self.inner.level()
    }

    fn report(&mut self, message: DiagnosticMessage) -> Result<(), ReportError> {
        match message.level() {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            _ => {}
        }
        self.inner.report(message)
    }
}

/// Forwards messages to `tracing`, at the event level matching their
/// severity.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingReporter {
    level: Severity,
}

impl TracingReporter {
    pub fn new(level: Severity) -> Self {
        TracingReporter { level }
    }
}

impl DiagnosticReporter for TracingReporter {
    fn level(&self) -> Severity {
        self.level
    }

    fn report(&mut self, message: DiagnosticMessage) -> Result<(), ReportError> {
        if !self.is_enabled(message.level()) {
            return Ok(());
        }
        let code = message.code().unwrap_or_default();
        match message.level() {
            Severity::Error => tracing::error!(code, "{message}"),
            Severity::Warning => tracing::warn!(code, "{message}"),
            Severity::Information => tracing::info!(code, "{message}"),
            Severity::Verbose | Severity::None => tracing::debug!(code, "{message}"),
        }
        Ok(())
    }
}
