//! Software capability registry.
//!
//! An immutable table of fitness-management products, built once per
//! process and shared by reference across worker threads. Detection is a
//! case-insensitive substring match of product signatures against free
//! text (technology names and categories) and URLs.

mod catalog;
pub mod quality;

use crate::core::errors::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub use quality::{quality_score, recommendation_for, red_flags, SoftwareReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftwareCategory {
    AllInOne,
    BoutiqueFitness,
    Crossfit,
    YogaPilates,
    MartialArts,
    PersonalTraining,
    RecreationCenter,
    ChainFranchise,
}

impl SoftwareCategory {
    pub const ALL: [SoftwareCategory; 8] = [
        SoftwareCategory::AllInOne,
        SoftwareCategory::BoutiqueFitness,
        SoftwareCategory::Crossfit,
        SoftwareCategory::YogaPilates,
        SoftwareCategory::MartialArts,
        SoftwareCategory::PersonalTraining,
        SoftwareCategory::RecreationCenter,
        SoftwareCategory::ChainFranchise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoftwareCategory::AllInOne => "all_in_one",
            SoftwareCategory::BoutiqueFitness => "boutique_fitness",
            SoftwareCategory::Crossfit => "crossfit",
            SoftwareCategory::YogaPilates => "yoga_pilates",
            SoftwareCategory::MartialArts => "martial_arts",
            SoftwareCategory::PersonalTraining => "personal_training",
            SoftwareCategory::RecreationCenter => "recreation_center",
            SoftwareCategory::ChainFranchise => "chain_franchise",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|c| c.as_str() == normalized)
    }
}

impl fmt::Display for SoftwareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Premium,
    Good,
    Average,
    Basic,
    Outdated,
}

impl QualityTier {
    pub const ALL: [QualityTier; 5] = [
        QualityTier::Premium,
        QualityTier::Good,
        QualityTier::Average,
        QualityTier::Basic,
        QualityTier::Outdated,
    ];

    /// Starting point of the quality score
    pub fn base_score(&self) -> f64 {
        match self {
            QualityTier::Premium => 90.0,
            QualityTier::Good => 75.0,
            QualityTier::Average => 60.0,
            QualityTier::Basic => 40.0,
            QualityTier::Outdated => 20.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Premium => "premium",
            QualityTier::Good => "good",
            QualityTier::Average => "average",
            QualityTier::Basic => "basic",
            QualityTier::Outdated => "outdated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|q| q.as_str() == normalized)
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    Budget,
    MidRange,
    Premium,
}

impl PricingTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingTier::Budget => "budget",
            PricingTier::MidRange => "mid_range",
            PricingTier::Premium => "premium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketShare {
    High,
    Medium,
    Low,
    Niche,
}

impl MarketShare {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketShare::High => "high",
            MarketShare::Medium => "medium",
            MarketShare::Low => "low",
            MarketShare::Niche => "niche",
        }
    }
}

/// One product in the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityEntry {
    pub name: &'static str,
    pub category: SoftwareCategory,
    pub quality: QualityTier,
    pub founded_year: i32,
    pub last_updated: i32,
    pub pricing_tier: PricingTier,
    pub features: &'static [&'static str],
    pub technology_stack: &'static [&'static str],
    pub signatures: &'static [&'static str],
    pub mobile_app: bool,
    pub api_available: bool,
    pub integrations: &'static [&'static str],
    pub market_share: MarketShare,
    pub target_sizes: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub website: &'static str,
    /// App-store quality of the member app, when one is published
    pub member_app_rating: Option<f64>,
}

impl CapabilityEntry {
    /// Lookup key: lowercase name with spaces replaced by underscores
    pub fn key(&self) -> String {
        registry_key(self.name)
    }

    /// Built for gyms, as opposed to generic scheduling or payments tools
    pub fn is_gym_specific(&self) -> bool {
        !self.weaknesses.contains(&"not_gym_specific")
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(&feature)
    }

    /// Can take bookings on behalf of the gym
    pub fn supports_booking(&self) -> bool {
        self.features
            .iter()
            .any(|f| matches!(*f, "scheduling" | "basic_scheduling"))
    }

    pub fn is_outdated(&self) -> bool {
        self.quality == QualityTier::Outdated
    }
}

pub fn registry_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Per-registry counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_quality: BTreeMap<String, usize>,
    pub outdated: usize,
    pub signatures: usize,
    pub with_mobile_app: usize,
    pub with_api: usize,
}

#[derive(Debug)]
pub struct CapabilityRegistry {
    entries: Vec<CapabilityEntry>,
    /// Signature to entry position, in catalog order
    signatures: Vec<(&'static str, usize)>,
    by_signature: HashMap<&'static str, usize>,
    by_key: HashMap<String, usize>,
}

impl CapabilityRegistry {
    /// Build a registry, refusing entries whose signatures collide
    pub fn new(entries: Vec<CapabilityEntry>) -> Result<Self> {
        let mut signatures = Vec::new();
        let mut by_signature = HashMap::new();
        let mut by_key = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if by_key.insert(entry.key(), index).is_some() {
                return Err(Error::Registry(format!(
                    "duplicate product key '{}'",
                    entry.key()
                )));
            }
            for signature in entry.signatures {
                let signature = signature.trim();
                if signature.is_empty() || signature != signature.to_lowercase() {
                    return Err(Error::Registry(format!(
                        "signature '{}' of {} must be non-empty lowercase",
                        signature, entry.name
                    )));
                }
                if let Some(previous) = by_signature.insert(signature, index) {
                    return Err(Error::Registry(format!(
                        "signature '{}' maps to both {} and {}",
                        signature, entries[previous].name, entry.name
                    )));
                }
                signatures.push((signature, index));
            }
        }

        Ok(Self {
            entries,
            signatures,
            by_signature,
            by_key,
        })
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            signatures: Vec::new(),
            by_signature: HashMap::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn entries(&self) -> &[CapabilityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up by display name or key, case-insensitively
    pub fn get_by_name(&self, name: &str) -> Option<&CapabilityEntry> {
        self.by_key
            .get(&registry_key(name))
            .map(|&index| &self.entries[index])
    }

    /// The product owning an exact signature
    pub fn owner_of(&self, signature: &str) -> Option<&CapabilityEntry> {
        self.by_signature
            .get(signature.to_lowercase().as_str())
            .map(|&index| &self.entries[index])
    }

    pub fn all_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn by_category(&self, category: SoftwareCategory) -> Vec<&CapabilityEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn by_quality(&self, quality: QualityTier) -> Vec<&CapabilityEntry> {
        self.entries.iter().filter(|e| e.quality == quality).collect()
    }

    /// Products last updated in or before `cutoff_year`
    pub fn outdated(&self, cutoff_year: i32) -> Vec<&CapabilityEntry> {
        self.entries
            .iter()
            .filter(|e| e.last_updated <= cutoff_year)
            .collect()
    }

    /// Positions of every product with a signature inside `text`, in
    /// catalog order
    fn matching_positions(&self, text: &str) -> Vec<usize> {
        let text = text.to_lowercase();
        let mut hits: Vec<usize> = Vec::new();
        for (signature, index) in &self.signatures {
            if !hits.contains(index) && text.contains(signature) {
                hits.push(*index);
            }
        }
        hits.sort_unstable();
        hits
    }

    /// Products detected in any of the texts. Each product appears once, in
    /// the order it was first detected.
    pub fn detect<I, S>(&self, texts: I) -> Vec<&CapabilityEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: Vec<usize> = Vec::new();
        for text in texts {
            for index in self.matching_positions(text.as_ref()) {
                if !seen.contains(&index) {
                    seen.push(index);
                }
            }
        }
        seen.into_iter().map(|index| &self.entries[index]).collect()
    }

    /// Products whose signatures appear in a URL
    pub fn detect_in_url(&self, url: &str) -> Vec<&CapabilityEntry> {
        self.detect([url])
    }

    pub fn stats(&self, outdated_cutoff: i32) -> RegistryStats {
        let by_category = SoftwareCategory::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), self.by_category(*c).len()))
            .collect();
        let by_quality = QualityTier::ALL
            .iter()
            .map(|q| (q.as_str().to_string(), self.by_quality(*q).len()))
            .collect();

        RegistryStats {
            total: self.entries.len(),
            by_category,
            by_quality,
            outdated: self.outdated(outdated_cutoff).len(),
            signatures: self.signatures.len(),
            with_mobile_app: self.entries.iter().filter(|e| e.mobile_app).count(),
            with_api: self.entries.iter().filter(|e| e.api_available).count(),
        }
    }
}

fn build_builtin_registry() -> CapabilityRegistry {
    CapabilityRegistry::new(catalog::builtin_entries()).unwrap_or_else(|e| {
        log::error!("Built-in capability registry is invalid: {}", e);
        CapabilityRegistry::empty()
    })
}

static REGISTRY: Lazy<CapabilityRegistry> = Lazy::new(build_builtin_registry);

/// The shared built-in registry
pub fn registry() -> &'static CapabilityRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_has_every_product() {
        let registry = registry();
        assert_eq!(registry.len(), 18);
        assert_eq!(
            registry.get_by_name("zen planner").map(|e| e.name),
            Some("Zen Planner")
        );
        assert_eq!(
            registry.get_by_name("WordPress + Plugins").map(|e| e.key()),
            Some("wordpress_+_plugins".to_string())
        );
    }

    #[test]
    fn test_builtin_signatures_are_unique() {
        let total: usize = catalog::builtin_entries()
            .iter()
            .map(|e| e.signatures.len())
            .sum();
        assert_eq!(registry().stats(2022).signatures, total);
    }

    #[test]
    fn test_duplicate_signature_is_rejected() {
        let mut entries = catalog::builtin_entries();
        let mut copy = entries[0].clone();
        copy.name = "MindBody Clone";
        entries.push(copy);
        let err = CapabilityRegistry::new(entries).unwrap_err();
        assert!(err.to_string().contains("maps to both MindBody and MindBody Clone"));
    }

    #[test]
    fn test_detect_dedupes_in_first_detection_order() {
        let detected = registry().detect([
            "Wodify Core Fitness",
            "MindBody Online Scheduling",
            "wodify widget",
        ]);
        let names: Vec<_> = detected.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Wodify", "MindBody"]);
    }

    #[test]
    fn test_detect_in_url() {
        let detected = registry().detect_in_url("https://clients.MINDBODYONLINE.com/classic/ws?studioid=1");
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].name, "MindBody");
        assert!(registry().detect_in_url("https://ironhouse.example").is_empty());
    }

    #[test]
    fn test_queries() {
        let registry = registry();
        assert_eq!(registry.by_category(SoftwareCategory::Crossfit).len(), 2);
        assert_eq!(registry.by_quality(QualityTier::Outdated)[0].name, "ABC Financial");
        let outdated: Vec<_> = registry.outdated(2022).iter().map(|e| e.name).collect();
        assert_eq!(outdated, vec!["ABC Financial"]);
        assert_eq!(registry.owner_of("HEALCODE").map(|e| e.name), Some("MindBody"));
    }

    #[test]
    fn test_gym_specific_flag() {
        let registry = registry();
        assert!(registry.get_by_name("MindBody").unwrap().is_gym_specific());
        assert!(!registry.get_by_name("Calendly").unwrap().is_gym_specific());
    }

    #[test]
    fn test_stats_breakdown() {
        let stats = registry().stats(2022);
        assert_eq!(stats.total, 18);
        assert_eq!(stats.by_category["all_in_one"], 9);
        assert_eq!(stats.by_quality["premium"], 1);
        assert_eq!(stats.outdated, 1);
        assert_eq!(stats.by_category.values().sum::<usize>(), 18);
    }
}
