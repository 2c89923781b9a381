use crate::core::{GymType, Lead, SizeTier};

/// Services that make a facility harder to run without software
const COMPLEX_SERVICES: &[&str] = &[
    "personal_training",
    "group_classes",
    "childcare",
    "nutrition",
    "physical_therapy",
    "massage",
];

/// How visible the business is online, 0-100
pub fn digital_presence_score(lead: &Lead) -> f64 {
    let mut score = 0.0;
    if lead.has_website() {
        score += 30.0;
    }
    if lead.place_id.is_some() {
        score += 10.0;
    }
    score += match lead.review_count {
        n if n >= 100 => 20.0,
        n if n >= 20 => 10.0,
        _ => 0.0,
    };
    score += match lead.rating {
        Some(r) if r >= 4.0 => 15.0,
        Some(r) if r > 0.0 => 5.0,
        _ => 0.0,
    };
    if lead.photo_count > 0 {
        score += 15.0;
    }
    if lead.has_phone() {
        score += 10.0;
    }
    f64::min(score, 100.0)
}

fn software_needs_base(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::TraditionalGym | GymType::FitnessCenter => 50.0,
        GymType::HealthClub | GymType::RecreationCenter => 55.0,
        GymType::Crossfit | GymType::BoutiqueFitness => 45.0,
        GymType::PersonalTraining | GymType::DanceStudio => 35.0,
        _ => 40.0,
    }
}

/// How much operational software the business needs, 0-100
pub fn software_needs_score(gym_type: GymType, size: SizeTier, services: &[String]) -> f64 {
    let size_bonus = match size {
        SizeTier::Large => 25.0,
        SizeTier::Medium => 15.0,
        SizeTier::Small => 5.0,
        SizeTier::Unknown => 0.0,
    };
    let complex = services
        .iter()
        .filter(|s| COMPLEX_SERVICES.contains(&s.as_str()))
        .count() as f64;
    f64::min(
        software_needs_base(gym_type) + size_bonus + f64::min(complex * 5.0, 20.0),
        100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_presence_caps_at_100() {
        let mut lead = Lead::new("Iron House");
        lead.website = Some("https://ironhouse.example".into());
        lead.place_id = Some("ChIJ123".into());
        lead.review_count = 250;
        lead.rating = Some(4.6);
        lead.photo_count = 40;
        lead.phone = Some("(661) 555-0100".into());
        assert_eq!(digital_presence_score(&lead), 100.0);
    }

    #[test]
    fn test_partial_presence() {
        let mut lead = Lead::new("Iron House");
        lead.review_count = 25;
        lead.rating = Some(3.2);
        assert_eq!(digital_presence_score(&lead), 15.0);
    }

    #[test]
    fn test_software_needs() {
        let services = vec![
            "personal_training".to_string(),
            "group_classes".to_string(),
            "sauna".to_string(),
        ];
        assert_eq!(
            software_needs_score(GymType::HealthClub, SizeTier::Large, &services),
            90.0
        );
        assert_eq!(
            software_needs_score(GymType::PersonalTraining, SizeTier::Small, &[]),
            40.0
        );
    }
}
