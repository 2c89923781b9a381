//! Flattening a scored lead into `gym_*` field/value records.
//!
//! Every writer consumes the same flat record, so JSON, Markdown and the
//! terminal table always agree on field names. Fields of stages that never
//! ran are omitted rather than written as nulls.

use crate::core::Lead;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type LeadRecord = BTreeMap<String, Value>;

struct RecordBuilder {
    fields: LeadRecord,
}

impl RecordBuilder {
    fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    fn put(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    fn put_opt<T: Into<Value>>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.put(key, value);
        }
        self
    }
}

fn object<K: ToString, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.into()))
            .collect::<Map<String, Value>>(),
    )
}

fn identity(lead: &Lead, record: &mut RecordBuilder) {
    record
        .put("gym_name", lead.name.as_str())
        .put_opt("gym_address", lead.address.clone())
        .put_opt("gym_phone", lead.phone.clone())
        .put_opt("gym_website", lead.website.clone())
        .put_opt("gym_domain", lead.domain.clone())
        .put_opt("gym_place_id", lead.place_id.clone())
        .put_opt("gym_google_url", lead.google_url.clone())
        .put_opt("gym_latitude", lead.coordinates.map(|c| c.latitude))
        .put_opt("gym_longitude", lead.coordinates.map(|c| c.longitude))
        .put_opt("gym_rating", lead.rating)
        .put("gym_review_count", lead.review_count)
        .put_opt("gym_mobile_score", lead.mobile_score)
        .put("gym_linkedin_presence", lead.has_professional_network);
}

fn profile(lead: &Lead, record: &mut RecordBuilder) {
    let Some(profile) = &lead.profile else {
        return;
    };
    let attributes = &profile.attributes;
    record
        .put("gym_type", profile.gym_type.as_str())
        .put("gym_size_estimate", profile.size.tier.as_str())
        .put("gym_size_score", profile.size.score)
        .put("gym_size_confidence", profile.size.confidence)
        .put("gym_size_factors", profile.size.factors.clone())
        .put("gym_services", attributes.services.clone())
        .put("gym_location_type", attributes.location_type.as_str())
        .put("gym_membership_model", attributes.membership_model.as_str())
        .put("gym_equipment_types", attributes.equipment_types.clone())
        .put("gym_pricing_indicators", attributes.pricing_indicators.clone())
        .put("gym_price_level", attributes.price_level.as_str())
        .put("gym_operating_hours", attributes.hours.as_str())
        .put("gym_target_demographic", attributes.target_demographic.as_str())
        .put(
            "gym_franchise_chain",
            attributes.franchise_chain.clone().unwrap_or_default(),
        )
        .put("gym_years_in_business", attributes.years_in_business.as_str())
        .put("gym_staff_size_estimate", attributes.staff_size.as_str())
        .put("gym_digital_presence_score", attributes.digital_presence_score)
        .put("gym_software_needs_score", attributes.software_needs_score);
}

fn technology(lead: &Lead, record: &mut RecordBuilder) {
    if let Some(technology) = &lead.technology {
        let outdated: Vec<&str> = technology.outdated.iter().map(|t| t.name.as_str()).collect();
        record
            .put("gym_technology_age_score", technology.age_score)
            .put("gym_outdated_technologies", outdated)
            .put("gym_technology_flags", technology.flags.clone());
    }

    if let Some(software) = &lead.software {
        record
            .put("gym_software_detected", software.names())
            .put("gym_software_quality_score", software.overall_quality)
            .put(
                "gym_software_scores",
                object(
                    software
                        .detected
                        .iter()
                        .map(|r| (r.name.as_str(), r.quality_score)),
                ),
            )
            .put("gym_software_red_flags", software.red_flags.clone())
            .put(
                "gym_software_recommendations",
                software.recommendations.clone(),
            );
    }
}

fn website(lead: &Lead, record: &mut RecordBuilder) {
    if let Some(features) = &lead.features {
        let implemented: Vec<&str> = features.implemented.iter().map(|f| f.as_str()).collect();
        let missing: Vec<&str> = features.missing.iter().map(|f| f.as_str()).collect();
        record
            .put("gym_website_feature_score", features.score)
            .put(
                "gym_website_features",
                object(
                    crate::features::WebsiteFeature::ALL
                        .iter()
                        .map(|f| (f.as_str(), features.has(*f))),
                ),
            )
            .put("gym_website_implemented_features", implemented)
            .put("gym_website_missing_features", missing)
            .put("gym_website_feature_indicators", features.indicators.clone())
            .put(
                "gym_website_feature_recommendations",
                features.recommendations.clone(),
            );
    }

    if let Some(app) = &lead.mobile_app {
        record
            .put("gym_mobile_app_available", app.has_app)
            .put("gym_mobile_app_platforms", app.platforms.clone())
            .put("gym_mobile_app_quality_score", app.quality_score)
            .put("gym_mobile_app_providers", app.providers.clone())
            .put("gym_mobile_app_detection_method", app.detection_method.as_str())
            .put("gym_mobile_app_quality_issues", app.issues.clone())
            .put("gym_mobile_app_recommendations", app.recommendations.clone());
    }

    if let Some(infrastructure) = &lead.infrastructure {
        record
            .put("gym_digital_infrastructure_score", infrastructure.score)
            .put(
                "gym_digital_infrastructure_tier",
                infrastructure.tier.as_str(),
            )
            .put(
                "gym_digital_component_scores",
                object(infrastructure.component_scores.clone()),
            )
            .put("gym_digital_readiness", infrastructure.readiness)
            .put(
                "gym_digital_infrastructure_recommendations",
                infrastructure.recommendations.clone(),
            )
            .put(
                "gym_digital_critical_gaps",
                infrastructure.critical_gaps.clone(),
            )
            .put(
                "gym_competitive_position",
                infrastructure.competitive_position.as_str(),
            );
    }
}

fn pain(lead: &Lead, record: &mut RecordBuilder) {
    if let Some(baseline) = &lead.baseline {
        record
            .put("gym_baseline_pain_score", baseline.score)
            .put("gym_baseline_pain_level", baseline.level.as_str())
            .put("gym_baseline_status", baseline.status.as_str())
            .put("gym_baseline_pain_factors", baseline.factors.clone())
            .put("gym_mobile_red_flag", baseline.mobile_red_flag);
    }

    if let Some(pain) = &lead.pain {
        let factors: Vec<&str> = pain.factors.iter().map(|f| f.description.as_str()).collect();
        record
            .put("gym_pain_score", pain.score)
            .put("gym_pain_urgency", pain.urgency.as_str())
            .put(
                "gym_primary_pain_category",
                pain.primary_category.map(|c| c.as_str()).unwrap_or("none"),
            )
            .put("gym_pain_factors", factors)
            .put("gym_total_pain_points", pain.total_pain_points)
            .put("gym_critical_pain_issues", pain.critical_issues);
    }

    if let Some(adjusted) = &lead.adjusted_pain {
        record
            .put("gym_adjusted_pain_score", adjusted.score)
            .put("gym_adjusted_urgency", adjusted.urgency.as_str())
            .put("gym_size_pain_multiplier", adjusted.size_multiplier)
            .put("gym_model_pain_multiplier", adjusted.model_multiplier)
            .put(
                "gym_threshold_violations",
                adjusted.threshold_violations.clone(),
            );
    }
}

fn verdict(lead: &Lead, record: &mut RecordBuilder) {
    let Some(classification) = &lead.classification else {
        return;
    };
    record
        .put("gym_classification", classification.verdict.as_str())
        .put(
            "gym_classification_confidence",
            classification.confidence.as_str(),
        )
        .put(
            "gym_classification_reasons",
            classification.reasons.clone(),
        )
        .put(
            "gym_action_priority",
            classification.action_priority.as_str(),
        )
        .put(
            "gym_sales_readiness",
            classification.sales_readiness.as_str(),
        )
        .put(
            "gym_classification_summary",
            classification.summary.as_str(),
        );
}

fn qualification(lead: &Lead, record: &mut RecordBuilder) {
    if let Some(q) = &lead.qualification {
        record
            .put("gym_estimated_member_count", q.member_count)
            .put("gym_estimated_monthly_revenue", q.monthly_revenue)
            .put("gym_viability_score", q.viability_score)
            .put("gym_size_qualification", q.size_tier.as_str())
            .put("gym_revenue_tier", q.revenue_tier.as_str())
            .put("gym_revenue_potential", q.revenue_potential.as_str())
            .put("gym_qualification_tier", q.tier.as_str())
            .put("gym_software_budget", q.software_budget)
            .put("gym_qualification_reasons", q.reasons.clone())
            .put(
                "gym_disqualification_reasons",
                q.disqualification_reasons.clone(),
            );
    }

    if let Some(budget) = &lead.budget {
        let breakdown = &budget.breakdown;
        record
            .put("gym_software_budget_total", budget.total_budget)
            .put("gym_pricing_tier", budget.pricing_tier.as_str())
            .put("gym_recommended_package", budget.recommended_package)
            .put("gym_budget_confidence", budget.confidence.as_str())
            .put("gym_budget_factors", budget.factors.clone())
            .put(
                "gym_budget_breakdown",
                object([
                    ("core_platform", breakdown.core_platform),
                    ("mobile_app", breakdown.mobile_app),
                    ("integrations", breakdown.integrations),
                    ("support", breakdown.support),
                ]),
            )
            .put("gym_contract_term", budget.contract.term)
            .put("gym_competitor_spend", budget.competitor_spend)
            .put("gym_roi_multiple", budget.roi.roi_multiple)
            .put("gym_payback_months", budget.roi.payback_period_months);
    }
}

fn decision_makers(lead: &Lead, record: &mut RecordBuilder) {
    let Some(profile) = &lead.decision_makers else {
        return;
    };
    let titles: Vec<&str> = profile
        .likely_decision_makers
        .iter()
        .map(|dm| dm.title)
        .collect();
    record
        .put("gym_decision_structure", profile.structure.as_str())
        .put("gym_management_level", profile.management_level.as_str())
        .put("gym_owner_identified", profile.owner_identified)
        .put("gym_decision_makers", titles)
        .put_opt("gym_primary_contact", profile.primary_contact().map(|dm| dm.title))
        .put("gym_contact_quality", profile.contact_quality.as_str())
        .put("gym_decision_accessibility", profile.accessibility.as_str())
        .put("gym_sales_approach", profile.sales_approach.strategy)
        .put(
            "gym_sales_cycle",
            profile.sales_approach.estimated_sales_cycle,
        );
}

/// Flatten a lead into its output record
pub fn to_record(lead: &Lead) -> LeadRecord {
    let mut record = RecordBuilder::new();
    identity(lead, &mut record);
    profile(lead, &mut record);
    technology(lead, &mut record);
    website(lead, &mut record);
    pain(lead, &mut record);
    verdict(lead, &mut record);
    qualification(lead, &mut record);
    decision_makers(lead, &mut record);
    record
        .put("gym_status", lead.status.as_str())
        .put_opt("gym_status_source", lead.status_source.clone())
        .put("gym_error_notes", lead.error_notes.clone());
    record.fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LeadStatus;

    #[test]
    fn test_unscored_lead_has_identity_and_status_only() {
        let mut lead = Lead::new("Iron Temple");
        lead.status = LeadStatus::Error;
        lead.note_error("Stage signal_extraction failed: boom");

        let record = to_record(&lead);
        assert_eq!(record["gym_name"], Value::from("Iron Temple"));
        assert_eq!(record["gym_status"], Value::from("error"));
        assert_eq!(record["gym_review_count"], Value::from(0));
        assert!(!record.contains_key("gym_type"));
        assert!(!record.contains_key("gym_classification"));
        assert!(!record.contains_key("gym_rating"));
        assert_eq!(
            record["gym_error_notes"],
            Value::from(vec!["Stage signal_extraction failed: boom"])
        );
    }

    #[test]
    fn test_all_fields_are_gym_prefixed() {
        let record = to_record(&Lead::new("Anything"));
        assert!(record.keys().all(|k| k.starts_with("gym_")));
    }
}
