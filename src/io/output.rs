use crate::core::Lead;
use crate::io::record::{to_record, LeadRecord};
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::pipeline::BatchSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// What a writer renders: the flat lead records and the batch dashboard
#[derive(Debug, Clone, Serialize)]
pub struct LeadReport {
    pub generated_at: DateTime<Utc>,
    pub summary: BatchSummary,
    pub leads: Vec<LeadRecord>,
}

impl LeadReport {
    pub fn new(leads: &[Lead], summary: BatchSummary, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            summary,
            leads: leads.iter().map(to_record).collect(),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &LeadReport) -> anyhow::Result<()>;
}

/// Create a writer for the format. Terminal output is colored unless `plain`.
pub fn create_writer(
    format: OutputFormat,
    out: Box<dyn Write>,
    plain: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out, !plain)),
    }
}

/// Render a record value for text output: lists joined, nulls empty
pub fn display_value(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.1}", f),
            _ => n.to_string(),
        },
        Value::Bool(b) => if *b { "yes" } else { "no" }.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, display_value(v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(42.26)), "42.3");
        assert_eq!(display_value(&json!(true)), "yes");
        assert_eq!(display_value(&json!(["a", "b"])), "a; b");
        assert_eq!(display_value(&json!({"x": 1})), "x: 1");
    }
}
