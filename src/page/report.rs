//! Recoverable parse warnings.
//!
//! Some inputs are accepted but deserve a diagnostic: coordinate strings
//! that only match the relaxed grammar, and identifiers that silently
//! replace an earlier sibling. These are collected into a [`ParseReport`]
//! instead of failing the parse.

use serde::Serialize;
use std::fmt;

use super::xml::ElementKind;

/// The warnings collected while parsing a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// All warnings, in the order they were raised.
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Adds a warning to the report.
    pub fn add(&mut self, warning: ParseWarning) {
        tracing::debug!(code = warning.code(), "{warning}");
        self.warnings.push(warning);
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if no warnings were raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns true if the parse is acceptable under `opts`.
    pub fn passes(&self, opts: &ValidateOptions) -> bool {
        !opts.strict || self.is_clean()
    }

    /// Emits every collected warning through `tracing`.
    ///
    /// Used by the convenience entry points that do not hand a report back
    /// to the caller.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!(code = warning.code(), "{warning}");
        }
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.warnings.is_empty() {
            return writeln!(f, "Validation passed: no issues found");
        }

        writeln!(
            f,
            "Parsing completed with {} warning(s):",
            self.warning_count()
        )?;
        writeln!(f)?;

        for warning in &self.warnings {
            writeln!(f, "  [WARN ] {}: {}", warning.code(), warning)?;
        }

        Ok(())
    }
}

/// A single recoverable problem found while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ParseWarning {
    /// A `points` string used negative coordinates, which the official
    /// grammar does not allow.
    NonStrictCoords { points: String },

    /// An identifier appeared twice among siblings; the later entry
    /// replaced the earlier one.
    DuplicateId { element: ElementKind, id: String },
}

impl ParseWarning {
    /// A stable code for the warning type.
    pub fn code(&self) -> &'static str {
        match self {
            ParseWarning::NonStrictCoords { .. } => "non_strict_coords",
            ParseWarning::DuplicateId { .. } => "duplicate_id",
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::NonStrictCoords { points } => write!(
                f,
                "Warning: Coords XML string does not match the PAGE XMl spec: {points}"
            ),
            ParseWarning::DuplicateId { element, id } => write!(
                f,
                "{element}: duplicate id '{id}' replaces an earlier {element}"
            ),
        }
    }
}

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}
