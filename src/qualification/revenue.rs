//! Member and revenue estimation tables.

use crate::core::{GymType, SizeTier};
use crate::signals::attributes::PriceLevel;
use serde::Serialize;

/// Midpoint member count of each size tier's typical range
pub fn size_base_members(size: SizeTier) -> f64 {
    match size {
        SizeTier::Large => 2500.0,
        SizeTier::Medium => 600.0,
        SizeTier::Small => 150.0,
        SizeTier::Unknown => 250.0,
    }
}

/// How many members a business model holds relative to a traditional gym
pub fn member_multiplier(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::HealthClub | GymType::RecreationCenter => 1.2,
        GymType::TraditionalGym
        | GymType::FitnessCenter
        | GymType::GeneralFitness
        | GymType::Unknown => 1.0,
        GymType::MartialArts => 0.7,
        GymType::YogaStudio => 0.6,
        GymType::BoutiqueFitness
        | GymType::DanceStudio
        | GymType::Boxing
        | GymType::Specialty => 0.5,
        GymType::Crossfit => 0.4,
        GymType::PersonalTraining => 0.2,
    }
}

pub fn review_adjustment(review_count: u32) -> f64 {
    match review_count {
        n if n >= 500 => 1.3,
        n if n >= 200 => 1.1,
        n if n < 50 => 0.7,
        _ => 1.0,
    }
}

pub fn estimate_members(size: SizeTier, gym_type: GymType, review_count: u32) -> u32 {
    let members =
        size_base_members(size) * member_multiplier(gym_type) * review_adjustment(review_count);
    members.round() as u32
}

/// Monthly revenue per member by business model and price level
pub fn member_rate(gym_type: GymType, price: PriceLevel) -> f64 {
    let (budget, mid, premium) = match gym_type {
        GymType::PersonalTraining => (300.0, 450.0, 600.0),
        GymType::Crossfit => (120.0, 160.0, 200.0),
        GymType::BoutiqueFitness => (100.0, 140.0, 180.0),
        GymType::Boxing => (80.0, 120.0, 160.0),
        GymType::MartialArts => (80.0, 100.0, 150.0),
        GymType::YogaStudio => (60.0, 100.0, 150.0),
        GymType::Specialty => (70.0, 110.0, 150.0),
        GymType::DanceStudio => (60.0, 90.0, 130.0),
        GymType::HealthClub => (50.0, 80.0, 150.0),
        GymType::FitnessCenter => (30.0, 60.0, 120.0),
        GymType::TraditionalGym => (20.0, 50.0, 90.0),
        GymType::RecreationCenter => (25.0, 50.0, 80.0),
        GymType::GeneralFitness | GymType::Unknown => (30.0, 60.0, 100.0),
    };
    match price {
        PriceLevel::Budget => budget,
        PriceLevel::Mid => mid,
        PriceLevel::Premium => premium,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueTier {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl RevenueTier {
    pub fn from_monthly(revenue: u64) -> Self {
        match revenue {
            r if r >= 100_000 => RevenueTier::Enterprise,
            r if r >= 50_000 => RevenueTier::Large,
            r if r >= 20_000 => RevenueTier::Medium,
            r if r >= 10_000 => RevenueTier::Small,
            _ => RevenueTier::Micro,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueTier::Micro => "micro",
            RevenueTier::Small => "small",
            RevenueTier::Medium => "medium",
            RevenueTier::Large => "large",
            RevenueTier::Enterprise => "enterprise",
        }
    }

    pub fn potential(&self) -> RevenuePotential {
        match self {
            RevenueTier::Micro => RevenuePotential::VeryLow,
            RevenueTier::Small => RevenuePotential::Low,
            RevenueTier::Medium => RevenuePotential::Medium,
            RevenueTier::Large => RevenuePotential::High,
            RevenueTier::Enterprise => RevenuePotential::VeryHigh,
        }
    }

    /// Viability points, at most 40
    pub fn points(&self) -> f64 {
        match self {
            RevenueTier::Enterprise => 40.0,
            RevenueTier::Large => 30.0,
            RevenueTier::Medium => 20.0,
            RevenueTier::Small => 10.0,
            RevenueTier::Micro => 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenuePotential {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RevenuePotential {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenuePotential::VeryLow => "very_low",
            RevenuePotential::Low => "low",
            RevenuePotential::Medium => "medium",
            RevenuePotential::High => "high",
            RevenuePotential::VeryHigh => "very_high",
        }
    }
}

/// Size bucket by estimated member count, independent of the size estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberTier {
    Micro,
    Small,
    Medium,
    Large,
}

impl MemberTier {
    pub fn from_members(members: u32) -> Self {
        match members {
            m if m >= 1000 => MemberTier::Large,
            m if m >= 300 => MemberTier::Medium,
            m if m >= 100 => MemberTier::Small,
            _ => MemberTier::Micro,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTier::Micro => "micro",
            MemberTier::Small => "small",
            MemberTier::Medium => "medium",
            MemberTier::Large => "large",
        }
    }

    /// Viability points, at most 30
    pub fn points(&self) -> f64 {
        match self {
            MemberTier::Large => 30.0,
            MemberTier::Medium => 25.0,
            MemberTier::Small => 15.0,
            MemberTier::Micro => 5.0,
        }
    }
}

/// Reputation viability points, at most 20
pub fn reputation_points(rating: Option<f64>, review_count: u32) -> f64 {
    match rating {
        Some(r) if r >= 4.5 && review_count >= 100 => 20.0,
        Some(r) if r >= 4.0 && review_count >= 50 => 15.0,
        Some(r) if r >= 4.0 => 8.0,
        Some(r) if r >= 3.5 => 5.0,
        _ => 0.0,
    }
}

/// Models growing faster than the market, at most 10 points
pub fn growth_points(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::BoutiqueFitness | GymType::Crossfit | GymType::YogaStudio => 10.0,
        _ => 0.0,
    }
}

/// Rule-of-thumb share of revenue a business spends on software
pub fn software_share(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::Crossfit | GymType::BoutiqueFitness => 0.03,
        GymType::YogaStudio | GymType::MartialArts | GymType::Boxing => 0.025,
        GymType::PersonalTraining => 0.015,
        _ => 0.02,
    }
}
