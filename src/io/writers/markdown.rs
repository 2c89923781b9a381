use crate::io::output::{display_value, LeadReport, OutputWriter};
use crate::io::record::LeadRecord;
use std::io::Write;

/// Columns of the lead table: heading and record field
const LEAD_COLUMNS: &[(&str, &str)] = &[
    ("Business", "gym_name"),
    ("Status", "gym_status"),
    ("Type", "gym_type"),
    ("Size", "gym_size_estimate"),
    ("Pain", "gym_adjusted_pain_score"),
    ("Infrastructure", "gym_digital_infrastructure_score"),
    ("Budget ($/mo)", "gym_software_budget_total"),
    ("Priority", "gym_action_priority"),
];

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &LeadReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_lead_table(&report.leads)?;
        self.write_lead_details(&report.leads)?;
        Ok(())
    }
}

fn cell(record: &LeadRecord, field: &str) -> String {
    record
        .get(field)
        .map(display_value)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "-".to_string())
        .replace('|', "\\|")
}

fn list(record: &LeadRecord, field: &str) -> Vec<String> {
    match record.get(field) {
        Some(serde_json::Value::Array(items)) => items.iter().map(display_value).collect(),
        _ => Vec::new(),
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &LeadReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Lead Scoring Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &LeadReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Status | Leads | Share |")?;
        writeln!(self.writer, "|--------|-------|-------|")?;
        for (label, count) in [
            ("🔴 RED", summary.red),
            ("🟡 YELLOW", summary.yellow),
            ("🟢 GREEN", summary.green),
            ("⚪ ERROR", summary.error),
        ] {
            writeln!(
                self.writer,
                "| {} | {} | {:.1}% |",
                label,
                count,
                summary.percentage(count)
            )?;
        }
        writeln!(self.writer)?;

        if summary.rejected > 0 {
            writeln!(
                self.writer,
                "{} record(s) were rejected before scoring.",
                summary.rejected
            )?;
            writeln!(self.writer)?;
        }

        let averages = [
            ("Pain score", summary.average_pain),
            ("Mobile performance", summary.average_mobile_score),
            ("Technology age", summary.average_technology_age),
            ("Digital infrastructure", summary.average_infrastructure),
        ];
        if averages.iter().any(|(_, v)| v.is_some()) {
            writeln!(self.writer, "| Average | Score |")?;
            writeln!(self.writer, "|---------|-------|")?;
            for (label, value) in averages {
                if let Some(value) = value {
                    writeln!(self.writer, "| {} | {:.1} |", label, value)?;
                }
            }
            writeln!(self.writer)?;
        }

        let factors = summary.top_pain_factors(5);
        if !factors.is_empty() {
            writeln!(self.writer, "### Most Common Pain Factors")?;
            writeln!(self.writer)?;
            for (factor, count) in factors {
                writeln!(self.writer, "- {} ({})", factor, count)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_lead_table(&mut self, leads: &[LeadRecord]) -> anyhow::Result<()> {
        if leads.is_empty() {
            writeln!(self.writer, "No leads scored.")?;
            return Ok(());
        }

        writeln!(self.writer, "## Leads")?;
        writeln!(self.writer)?;
        let headings: Vec<&str> = LEAD_COLUMNS.iter().map(|(h, _)| *h).collect();
        writeln!(self.writer, "| {} |", headings.join(" | "))?;
        let rule: Vec<String> = headings.iter().map(|h| "-".repeat(h.len())).collect();
        writeln!(self.writer, "|{}|", rule.join("|"))?;
        for record in leads {
            let cells: Vec<String> = LEAD_COLUMNS
                .iter()
                .map(|(_, field)| cell(record, field))
                .collect();
            writeln!(self.writer, "| {} |", cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_lead_details(&mut self, leads: &[LeadRecord]) -> anyhow::Result<()> {
        for record in leads {
            let summary = cell(record, "gym_classification_summary");
            let notes = list(record, "gym_error_notes");
            if summary == "-" && notes.is_empty() {
                continue;
            }

            writeln!(self.writer, "### {}", cell(record, "gym_name"))?;
            writeln!(self.writer)?;
            if summary != "-" {
                writeln!(self.writer, "{}", summary)?;
                writeln!(self.writer)?;
            }
            for reason in list(record, "gym_classification_reasons") {
                writeln!(self.writer, "- {}", reason)?;
            }
            let contact = cell(record, "gym_primary_contact");
            if contact != "-" {
                writeln!(
                    self.writer,
                    "- Primary contact: {} (accessibility: {})",
                    contact,
                    cell(record, "gym_decision_accessibility")
                )?;
            }
            for note in notes {
                writeln!(self.writer, "- ⚠️ {}", note)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Lead, LeadStatus};
    use crate::pipeline::BatchSummary;
    use chrono::TimeZone;

    fn render(leads: &[Lead]) -> String {
        let generated = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let report = LeadReport::new(leads, BatchSummary::from_leads(leads, 0), generated);
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_report(&report).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let mut lead = Lead::new("Iron | Temple");
        lead.status = LeadStatus::Red;
        let output = render(&[lead]);

        assert!(output.starts_with("# Lead Scoring Report"));
        assert!(output.contains("Generated: 2024-06-01 12:00:00 UTC"));
        assert!(output.contains("| 🔴 RED | 1 | 100.0% |"));
        assert!(output.contains("| Iron \\| Temple | red | - |"));
    }

    #[test]
    fn test_error_notes_listed() {
        let mut lead = Lead::new("Broken Gym");
        lead.status = LeadStatus::Error;
        lead.note_error("Stage pain_analysis failed: boom");
        let output = render(&[lead]);
        assert!(output.contains("### Broken Gym"));
        assert!(output.contains("- ⚠️ Stage pain_analysis failed: boom"));
    }

    #[test]
    fn test_empty_report() {
        let output = render(&[]);
        assert!(output.contains("No leads scored."));
    }
}
