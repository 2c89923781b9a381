use crate::config::{get_config, SoftwareConfig};
use crate::io::OutputFormat;
use crate::registry::{
    registry, CapabilityRegistry, QualityTier, RegistryStats, SoftwareCategory, SoftwareReport,
};
use anyhow::{bail, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct RegistryQuery {
    pub category: Option<String>,
    pub quality: Option<String>,
    pub outdated_before: Option<i32>,
}

#[derive(Debug, Serialize)]
struct RegistryListing {
    products: Vec<SoftwareReport>,
    stats: RegistryStats,
}

pub fn handle_registry(query: RegistryQuery, format: OutputFormat) -> Result<()> {
    let software = get_config().software_config();
    let reports = query_registry(registry(), &query, &software)?;
    let stats = registry().stats(software.outdated_cutoff);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            let listing = RegistryListing {
                products: reports,
                stats,
            };
            serde_json::to_writer_pretty(&mut out, &listing)?;
            writeln!(out)?;
        }
        OutputFormat::Markdown | OutputFormat::Terminal => {
            write_registry_table(&mut out, &reports, &stats)?;
        }
    }
    Ok(())
}

/// Products matching every given filter, as quality reports
pub fn query_registry(
    registry: &CapabilityRegistry,
    query: &RegistryQuery,
    software: &SoftwareConfig,
) -> Result<Vec<SoftwareReport>> {
    let category = match query.category.as_deref() {
        Some(raw) => match SoftwareCategory::parse(raw) {
            Some(category) => Some(category),
            None => bail!(
                "Unknown category '{}'. Valid categories: {}",
                raw,
                SoftwareCategory::ALL.map(|c| c.as_str()).join(", ")
            ),
        },
        None => None,
    };
    let quality = match query.quality.as_deref() {
        Some(raw) => match QualityTier::parse(raw) {
            Some(quality) => Some(quality),
            None => bail!(
                "Unknown quality tier '{}'. Valid tiers: {}",
                raw,
                QualityTier::ALL.map(|q| q.as_str()).join(", ")
            ),
        },
        None => None,
    };
    let outdated: Option<Vec<&str>> = query
        .outdated_before
        .map(|year| registry.outdated(year).iter().map(|e| e.name).collect());

    Ok(registry
        .entries()
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| quality.map_or(true, |q| e.quality == q))
        .filter(|e| outdated.as_ref().map_or(true, |names| names.contains(&e.name)))
        .map(|e| SoftwareReport::assess(e, software))
        .collect())
}

fn write_registry_table(
    out: &mut impl Write,
    reports: &[SoftwareReport],
    stats: &RegistryStats,
) -> Result<()> {
    if reports.is_empty() {
        writeln!(out, "No products match the query.")?;
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Product", "Category", "Tier", "Quality", "Updated", "App", "API", "Verdict",
            ]);
        for report in reports {
            table.add_row(vec![
                Cell::new(&report.name),
                Cell::new(&report.category),
                Cell::new(&report.quality_tier),
                Cell::new(format!("{:.1}", report.quality_score))
                    .set_alignment(CellAlignment::Right),
                Cell::new(report.last_updated),
                Cell::new(if report.mobile_app { "yes" } else { "no" }),
                Cell::new(if report.api_available { "yes" } else { "no" }),
                Cell::new(&report.recommendation),
            ]);
        }
        writeln!(out, "{table}")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} products, {} signatures, {} outdated, {} with a member app, {} with an API",
        stats.total, stats.signatures, stats.outdated, stats.with_mobile_app, stats.with_api
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>, quality: Option<&str>, outdated: Option<i32>) -> RegistryQuery {
        RegistryQuery {
            category: category.map(String::from),
            quality: quality.map(String::from),
            outdated_before: outdated,
        }
    }

    #[test]
    fn test_unfiltered_query_lists_every_product() {
        let reports =
            query_registry(registry(), &RegistryQuery::default(), &SoftwareConfig::default())
                .unwrap();
        assert_eq!(reports.len(), registry().len());
    }

    #[test]
    fn test_filters_combine() {
        let reports = query_registry(
            registry(),
            &query(Some("all-in-one"), Some("premium"), None),
            &SoftwareConfig::default(),
        )
        .unwrap();
        assert!(reports
            .iter()
            .all(|r| r.category == "all_in_one" && r.quality_tier == "premium"));
    }

    #[test]
    fn test_outdated_filter_respects_cutoff() {
        let reports =
            query_registry(registry(), &query(None, None, Some(2020)), &SoftwareConfig::default())
                .unwrap();
        assert!(reports.iter().all(|r| r.last_updated <= 2020));
    }

    #[test]
    fn test_unknown_category_lists_valid_options() {
        let err = query_registry(
            registry(),
            &query(Some("spa"), None, None),
            &SoftwareConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("all_in_one"));
    }

    #[test]
    fn test_table_has_stats_line() {
        let reports =
            query_registry(registry(), &RegistryQuery::default(), &SoftwareConfig::default())
                .unwrap();
        let mut buffer = Vec::new();
        write_registry_table(&mut buffer, &reports, &registry().stats(2022)).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Zen Planner"));
        assert!(output.contains(&format!("{} products", registry().len())));
    }
}
