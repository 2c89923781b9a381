//! Best-effort stage results.
//!
//! Missing and malformed signals never fail a stage. The stage substitutes a
//! neutral default and records what it had to do as a diagnostic; the
//! orchestrator appends diagnostics to the lead's error notes.

use serde::Serialize;

/// A value produced from incomplete or coerced input, plus notes on how.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessed<T> {
    pub value: T,
    pub diagnostics: Vec<String>,
}

impl<T> Assessed<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(value: T, diagnostics: Vec<String>) -> Self {
        Self { value, diagnostics }
    }

    pub fn note(&mut self, diagnostic: impl Into<String>) {
        self.diagnostics.push(diagnostic.into());
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Assessed<U> {
        Assessed {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.diagnostics)
    }
}
