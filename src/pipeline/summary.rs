//! Batch scoring dashboard.

use crate::core::types::round1;
use crate::core::{Lead, LeadStatus};
use serde::Serialize;
use std::collections::BTreeMap;

const TOP_LEADS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopLead {
    pub name: String,
    pub pain: f64,
    pub mobile_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Records rejected before they became leads
    pub rejected: usize,
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
    pub error: usize,
    pub average_pain: Option<f64>,
    pub average_mobile_score: Option<f64>,
    pub average_technology_age: Option<f64>,
    pub average_infrastructure: Option<f64>,
    pub mobile_issues: usize,
    pub technology_issues: usize,
    /// Pain factor descriptions by how many leads they fired for
    pub pain_factor_counts: BTreeMap<String, usize>,
    pub top_red_leads: Vec<TopLead>,
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| round1(sum / count as f64))
}

/// The most refined pain score a lead reached
pub fn headline_pain(lead: &Lead) -> Option<f64> {
    lead.adjusted_pain
        .as_ref()
        .map(|p| p.score)
        .or_else(|| lead.baseline.as_ref().map(|b| b.score))
}

/// Baseline factors plus pain-analysis factor descriptions
fn pain_factors(lead: &Lead) -> Vec<String> {
    let baseline = lead
        .baseline
        .iter()
        .flat_map(|b| b.factors.iter().cloned());
    let analysis = lead
        .pain
        .iter()
        .flat_map(|p| p.factors.iter().map(|f| f.description.clone()));
    baseline.chain(analysis).collect()
}

impl BatchSummary {
    pub fn from_leads(leads: &[Lead], rejected: usize) -> Self {
        let count = |status: LeadStatus| leads.iter().filter(|l| l.status == status).count();

        let mut pain_factor_counts = BTreeMap::new();
        let mut mobile_issues = 0;
        let mut technology_issues = 0;
        for factor in leads.iter().flat_map(pain_factors) {
            let lowered = factor.to_lowercase();
            if lowered.contains("mobile performance") {
                mobile_issues += 1;
            }
            if lowered.contains("technology") {
                technology_issues += 1;
            }
            *pain_factor_counts.entry(factor).or_insert(0) += 1;
        }

        let mut red_leads: Vec<TopLead> = leads
            .iter()
            .filter(|l| l.status == LeadStatus::Red)
            .map(|l| TopLead {
                name: l.name.clone(),
                pain: headline_pain(l).unwrap_or(0.0),
                mobile_score: l.mobile_score,
            })
            .collect();
        red_leads.sort_by(|a, b| b.pain.total_cmp(&a.pain));
        red_leads.truncate(TOP_LEADS);

        Self {
            total: leads.len(),
            rejected,
            red: count(LeadStatus::Red),
            yellow: count(LeadStatus::Yellow),
            green: count(LeadStatus::Green),
            error: count(LeadStatus::Error),
            average_pain: average(leads.iter().filter_map(headline_pain)),
            average_mobile_score: average(leads.iter().filter_map(|l| l.mobile_score)),
            average_technology_age: average(
                leads
                    .iter()
                    .filter_map(|l| l.technology.as_ref().map(|t| t.age_score)),
            ),
            average_infrastructure: average(
                leads
                    .iter()
                    .filter_map(|l| l.infrastructure.as_ref().map(|i| i.score)),
            ),
            mobile_issues,
            technology_issues,
            pain_factor_counts,
            top_red_leads: red_leads,
        }
    }

    /// Share of leads with a status, in percent
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            round1(count as f64 / self.total as f64 * 100.0)
        }
    }

    /// Most frequent pain factors, ties broken alphabetically
    pub fn top_pain_factors(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut factors: Vec<(&str, usize)> = self
            .pain_factor_counts
            .iter()
            .map(|(factor, count)| (factor.as_str(), *count))
            .collect();
        factors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        factors.truncate(limit);
        factors
    }

    /// Write the dashboard to the log at info level
    pub fn log(&self) {
        log::info!(
            "Batch processing complete: {} RED, {} YELLOW, {} GREEN, {} errors, {} rejected",
            self.red,
            self.yellow,
            self.green,
            self.error,
            self.rejected
        );
        if self.total == 0 {
            return;
        }

        log::info!("{}", "=".repeat(60));
        log::info!("SCORING DASHBOARD");
        log::info!("{}", "=".repeat(60));
        log::info!("Lead distribution:");
        for (label, count) in [
            ("RED (high pain)", self.red),
            ("YELLOW (medium pain)", self.yellow),
            ("GREEN (low pain)", self.green),
            ("ERROR", self.error),
        ] {
            log::info!(
                "   {:<22}{:>4} leads ({:.1}%)",
                label,
                count,
                self.percentage(count)
            );
        }

        log::info!("Average scores:");
        if let Some(pain) = self.average_pain {
            log::info!("   Pain score:          {:.1}/100 (lower is better)", pain);
        }
        if let Some(mobile) = self.average_mobile_score {
            log::info!("   Mobile performance:  {:.1}/100 (higher is better)", mobile);
        }
        if let Some(age) = self.average_technology_age {
            log::info!("   Technology age:      {:.1}/100 (higher is better)", age);
        }
        if let Some(infrastructure) = self.average_infrastructure {
            log::info!(
                "   Digital infrastructure: {:.1}/100 (higher is better)",
                infrastructure
            );
        }

        if !self.pain_factor_counts.is_empty() {
            log::info!("Pain factors:");
            log::info!("   Mobile performance issues: {}", self.mobile_issues);
            log::info!("   Technology stack issues:   {}", self.technology_issues);
        }

        if !self.top_red_leads.is_empty() {
            log::info!("Top pain leads:");
            for (rank, lead) in self.top_red_leads.iter().enumerate() {
                let mobile = lead
                    .mobile_score
                    .map(|m| format!("{:.0}/100", m))
                    .unwrap_or_else(|| "unknown".to_string());
                log::info!(
                    "   {}. {}: pain {:.1}, mobile {}",
                    rank + 1,
                    lead.name,
                    lead.pain,
                    mobile
                );
            }
        }
        log::info!("{}", "=".repeat(60));
    }
}
