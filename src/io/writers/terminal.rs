use crate::io::output::{display_value, LeadReport, OutputWriter};
use crate::io::record::LeadRecord;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }
}

fn field(record: &LeadRecord, name: &str) -> String {
    record
        .get(name)
        .map(display_value)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

fn status_color(status: &str) -> Option<Color> {
    match status {
        "red" => Some(Color::Red),
        "yellow" => Some(Color::Yellow),
        "green" => Some(Color::Green),
        "error" => Some(Color::DarkGrey),
        _ => None,
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &LeadReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_distribution(report)?;
        if report.leads.is_empty() {
            writeln!(self.writer, "No leads scored.")?;
            return Ok(());
        }
        let table = self.lead_table(&report.leads);
        writeln!(self.writer, "{table}")?;
        self.write_top_leads(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn paint(&self, text: &str, paint: fn(&str) -> ColoredString) -> String {
        if self.color {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        let rule = self.paint("═══════════════════════════════════════════", |s| s.cyan());
        let title = self.paint("           LEAD SCORING REPORT", |s| s.bold().cyan());
        writeln!(self.writer)?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, report: &LeadReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        let rows: [(&str, usize, fn(&str) -> ColoredString); 4] = [
            ("RED", summary.red, |s| s.red().bold()),
            ("YELLOW", summary.yellow, |s| s.yellow().bold()),
            ("GREEN", summary.green, |s| s.green().bold()),
            ("ERROR", summary.error, |s| s.dimmed()),
        ];
        for (label, count, paint) in rows {
            let label = self.paint(&format!("{label:<7}"), paint);
            writeln!(
                self.writer,
                "  {} {:>4} leads ({:.1}%)",
                label,
                count,
                summary.percentage(count)
            )?;
        }
        if summary.rejected > 0 {
            writeln!(self.writer, "  {} record(s) rejected", summary.rejected)?;
        }
        if let Some(pain) = summary.average_pain {
            writeln!(self.writer, "  Average pain score: {pain:.1}/100")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn lead_table(&self, leads: &[LeadRecord]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Business", "Status", "Type", "Size", "Pain", "Infra", "Budget", "Priority",
            ]);

        for record in leads {
            let status = field(record, "gym_status");
            let mut status_cell = Cell::new(status.to_uppercase());
            if self.color {
                if let Some(color) = status_color(&status) {
                    status_cell = status_cell.fg(color);
                }
            }
            table.add_row(vec![
                Cell::new(field(record, "gym_name")),
                status_cell,
                Cell::new(field(record, "gym_type")),
                Cell::new(field(record, "gym_size_estimate")),
                Cell::new(field(record, "gym_adjusted_pain_score"))
                    .set_alignment(CellAlignment::Right),
                Cell::new(field(record, "gym_digital_infrastructure_score"))
                    .set_alignment(CellAlignment::Right),
                Cell::new(field(record, "gym_software_budget_total"))
                    .set_alignment(CellAlignment::Right),
                Cell::new(field(record, "gym_action_priority")),
            ]);
        }
        table
    }

    fn write_top_leads(&mut self, report: &LeadReport) -> anyhow::Result<()> {
        if report.summary.top_red_leads.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        let heading = self.paint("🎯 Top pain leads", |s| s.bold());
        writeln!(self.writer, "{heading}")?;
        for (rank, lead) in report.summary.top_red_leads.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} (pain {:.1})",
                rank + 1,
                lead.name,
                lead.pain
            )?;
        }
        Ok(())
    }
}
