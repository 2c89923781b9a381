//! Improvement recommendations, critical gaps and competitive position.

use super::InfrastructureInputs;
use crate::features::WebsiteFeature;
use serde::Serialize;
use std::fmt;

pub const MAX_RECOMMENDATIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    /// Priority for a sub-score, or none once it reaches 70
    pub fn for_score(score: f64) -> Option<Self> {
        if score < 30.0 {
            Some(Priority::Critical)
        } else if score < 50.0 {
            Some(Priority::High)
        } else if score < 70.0 {
            Some(Priority::Medium)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improvement {
    pub priority: Priority,
    pub area: &'static str,
    pub action: String,
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.priority, self.area, self.action)
    }
}

struct ComponentAdvice {
    area: &'static str,
    critical: &'static str,
    high: &'static str,
    medium: &'static str,
}

const WEBSITE_ADVICE: ComponentAdvice = ComponentAdvice {
    area: "website features",
    critical: "Rebuild the website around booking, payments and a member portal",
    high: "Add the missing core website features members expect",
    medium: "Round out the website with e-commerce, chat and virtual classes",
};

const MOBILE_APP_ADVICE: ComponentAdvice = ComponentAdvice {
    area: "mobile app",
    critical: "Launch a branded member app for booking and check-in",
    high: "Move to a platform with a better-rated member app",
    medium: "Promote app adoption and enable push notifications",
};

const BOOKING_ADVICE: ComponentAdvice = ComponentAdvice {
    area: "online booking",
    critical: "Implement online class and appointment booking",
    high: "Connect booking to scheduling, memberships and payments",
    medium: "Streamline the booking flow and add waitlists",
};

const EXPERIENCE_ADVICE: ComponentAdvice = ComponentAdvice {
    area: "member experience",
    critical: "Give members self-service: mobile site, portal and instant support",
    high: "Improve member self-service and communication channels",
    medium: "Add virtual classes and social engagement for members",
};

fn advise(advice: &ComponentAdvice, score: f64) -> Option<Improvement> {
    let priority = Priority::for_score(score)?;
    let action = match priority {
        Priority::Critical => advice.critical,
        Priority::High => advice.high,
        Priority::Medium => advice.medium,
    };
    Some(Improvement {
        priority,
        area: advice.area,
        action: format!("{} (currently {:.0}/100)", action, score),
    })
}

/// Ranked improvements, most urgent first, at most eight
pub fn improvements(
    inputs: &InfrastructureInputs<'_>,
    website: f64,
    mobile_app: f64,
    booking: f64,
    experience: f64,
) -> Vec<Improvement> {
    let mut list: Vec<Improvement> = [
        (&WEBSITE_ADVICE, website),
        (&MOBILE_APP_ADVICE, mobile_app),
        (&BOOKING_ADVICE, booking),
        (&EXPERIENCE_ADVICE, experience),
    ]
    .into_iter()
    .filter_map(|(advice, score)| advise(advice, score))
    .collect();

    let flags = &inputs.features.flags;
    if inputs.features.has_data && !flags.mobile_responsive {
        list.push(Improvement {
            priority: Priority::Critical,
            area: "website features",
            action: "Make the website mobile responsive".to_string(),
        });
    }
    if !flags.payment_processing {
        list.push(Improvement {
            priority: Priority::High,
            area: "online booking",
            action: "Accept online payments for memberships and classes".to_string(),
        });
    }
    if inputs.software.has_outdated(inputs.software_config) {
        list.push(Improvement {
            priority: Priority::High,
            area: "software",
            action: "Replace outdated gym management software".to_string(),
        });
    } else if !inputs.software.has_gym_software() {
        list.push(Improvement {
            priority: Priority::Medium,
            area: "software",
            action: "Adopt a gym management platform with booking and member app".to_string(),
        });
    }

    list.sort_by_key(|improvement| improvement.priority);
    list.truncate(MAX_RECOMMENDATIONS);
    list
}

/// Gaps that on their own put the business behind digitally
pub fn critical_gaps(inputs: &InfrastructureInputs<'_>) -> Vec<String> {
    let mut gaps = Vec::new();
    let flags = &inputs.features.flags;

    if let Some(mobile) = inputs.mobile_score {
        if mobile < 50.0 {
            gaps.push(format!("Poor mobile website performance ({:.0}/100)", mobile));
        }
    }
    if !inputs.mobile_app.has_app {
        gaps.push("No dedicated mobile app for members".to_string());
    }
    if !flags.mobile_responsive {
        gaps.push("Website is not mobile responsive".to_string());
    }
    if !flags.online_booking && !inputs.software.detected.iter().any(|r| r.supports_booking) {
        gaps.push("No online booking capability".to_string());
    }
    if !flags.payment_processing {
        gaps.push("No online payment processing".to_string());
    }
    if !inputs.software.has_gym_software() {
        gaps.push("No specialized gym management software".to_string());
    } else if inputs.software.overall_quality < 40.0 {
        gaps.push(format!(
            "Low quality gym software ({:.0}/100)",
            inputs.software.overall_quality
        ));
    }
    if inputs.technology_age_score < 40.0 {
        gaps.push(format!(
            "Outdated website technology (age score {:.0})",
            inputs.technology_age_score
        ));
    }
    if !flags.get(WebsiteFeature::MemberPortal) {
        gaps.push("No self-service member portal".to_string());
    }

    gaps
}

/// One-line assessment of where the business stands against competitors
pub fn competitive_position(score: f64) -> &'static str {
    if score >= 85.0 {
        "Industry leader: digital experience ahead of most local competitors"
    } else if score >= 70.0 {
        "Competitive: digital offering on par with modern fitness businesses"
    } else if score >= 55.0 {
        "Below average: noticeable gaps against digitally mature competitors"
    } else if score >= 35.0 {
        "Falling behind: members are likely drawn to competitors with better digital tools"
    } else {
        "Critical disadvantage: digital experience far behind the local market"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitive_bands() {
        assert!(competitive_position(90.0).starts_with("Industry leader"));
        assert!(competitive_position(75.0).starts_with("Competitive"));
        assert!(competitive_position(60.0).starts_with("Below average"));
        assert!(competitive_position(40.0).starts_with("Falling behind"));
        assert!(competitive_position(20.0).starts_with("Critical disadvantage"));
    }

    #[test]
    fn test_priority_bands() {
        assert_eq!(Priority::for_score(29.9), Some(Priority::Critical));
        assert_eq!(Priority::for_score(30.0), Some(Priority::High));
        assert_eq!(Priority::for_score(69.0), Some(Priority::Medium));
        assert_eq!(Priority::for_score(70.0), None);
    }

    #[test]
    fn test_improvement_renders_priority_first() {
        let improvement = advise(&BOOKING_ADVICE, 20.0).unwrap();
        assert_eq!(
            improvement.to_string(),
            "CRITICAL (online booking): Implement online class and appointment booking (currently 20/100)"
        );
    }
}
