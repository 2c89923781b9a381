//! Website capability detection.
//!
//! Ten binary checks, each a keyword table evaluated against the joined
//! "name category" text of every detected technology. A lead with no website
//! or no technology data gets a zero score with `has_data` cleared, which
//! callers must not read as "nothing implemented".

use crate::signals::matched_keywords;
use crate::technology::TechnologySignal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteFeature {
    OnlineBooking,
    ClassScheduling,
    MembershipManagement,
    PaymentProcessing,
    MemberPortal,
    MobileResponsive,
    Ecommerce,
    VirtualClasses,
    LiveChat,
    SocialIntegration,
}

impl WebsiteFeature {
    pub const ALL: [WebsiteFeature; 10] = [
        WebsiteFeature::OnlineBooking,
        WebsiteFeature::ClassScheduling,
        WebsiteFeature::MembershipManagement,
        WebsiteFeature::PaymentProcessing,
        WebsiteFeature::MemberPortal,
        WebsiteFeature::MobileResponsive,
        WebsiteFeature::Ecommerce,
        WebsiteFeature::VirtualClasses,
        WebsiteFeature::LiveChat,
        WebsiteFeature::SocialIntegration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteFeature::OnlineBooking => "online_booking",
            WebsiteFeature::ClassScheduling => "class_scheduling",
            WebsiteFeature::MembershipManagement => "membership_management",
            WebsiteFeature::PaymentProcessing => "payment_processing",
            WebsiteFeature::MemberPortal => "member_portal",
            WebsiteFeature::MobileResponsive => "mobile_responsive",
            WebsiteFeature::Ecommerce => "ecommerce",
            WebsiteFeature::VirtualClasses => "virtual_classes",
            WebsiteFeature::LiveChat => "live_chat",
            WebsiteFeature::SocialIntegration => "social_integration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebsiteFeature::OnlineBooking => "Online booking",
            WebsiteFeature::ClassScheduling => "Class scheduling",
            WebsiteFeature::MembershipManagement => "Membership management",
            WebsiteFeature::PaymentProcessing => "Payment processing",
            WebsiteFeature::MemberPortal => "Member portal",
            WebsiteFeature::MobileResponsive => "Mobile responsive design",
            WebsiteFeature::Ecommerce => "E-commerce",
            WebsiteFeature::VirtualClasses => "Virtual classes",
            WebsiteFeature::LiveChat => "Live chat",
            WebsiteFeature::SocialIntegration => "Social media integration",
        }
    }

    fn action(&self) -> &'static str {
        match self {
            WebsiteFeature::OnlineBooking => {
                "Add an online booking system for classes and appointments"
            }
            WebsiteFeature::ClassScheduling => "Publish an interactive class schedule",
            WebsiteFeature::MembershipManagement => "Move membership management online",
            WebsiteFeature::PaymentProcessing => {
                "Accept online payments for memberships and classes"
            }
            WebsiteFeature::MemberPortal => "Provide a self-service member portal",
            WebsiteFeature::MobileResponsive => "Make the website mobile responsive",
            WebsiteFeature::Ecommerce => "Sell merchandise and class packages online",
            WebsiteFeature::VirtualClasses => "Offer virtual or on-demand classes",
            WebsiteFeature::LiveChat => "Add live chat so prospects get instant answers",
            WebsiteFeature::SocialIntegration => "Integrate social media feeds and sharing",
        }
    }
}

impl fmt::Display for WebsiteFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table per feature, matched at word starts in lowercased text.
/// A keyword also matches longer words it begins, so short brand-like
/// tokens must be spelled out in full.
pub const FEATURE_KEYWORDS: &[(WebsiteFeature, &[&str])] = &[
    (
        WebsiteFeature::OnlineBooking,
        &[
            "mindbody",
            "zen planner",
            "zenplanner",
            "wodify",
            "glofox",
            "teamup",
            "wellnessliving",
            "clubready",
            "pushpress",
            "pike13",
            "acuity",
            "calendly",
            "booking",
            "book now",
            "appointment",
            "reserv",
        ],
    ),
    (
        WebsiteFeature::ClassScheduling,
        &[
            "class schedule",
            "scheduling",
            "timetable",
            "mindbody",
            "zen planner",
            "zenplanner",
            "wodify",
            "glofox",
            "teamup",
            "pike13",
            "wellnessliving",
        ],
    ),
    (
        WebsiteFeature::MembershipManagement,
        &[
            "membership",
            "member management",
            "mindbody",
            "zen planner",
            "zenplanner",
            "wodify",
            "clubready",
            "abc financial",
            "wellnessliving",
            "pushpress",
            "rhinofit",
        ],
    ),
    (
        WebsiteFeature::PaymentProcessing,
        &[
            "stripe",
            "paypal",
            "squareup",
            "square payments",
            "braintree",
            "authorize.net",
            "payment",
            "apple pay",
        ],
    ),
    (
        WebsiteFeature::MemberPortal,
        &[
            "member portal",
            "client portal",
            "members area",
            "member area",
            "member login",
            "my account",
            "portal",
        ],
    ),
    (
        WebsiteFeature::MobileResponsive,
        &[
            "bootstrap",
            "responsive",
            "viewport",
            "foundation",
            "tailwind",
            "amp-html",
            "accelerated mobile pages",
        ],
    ),
    (
        WebsiteFeature::Ecommerce,
        &[
            "woocommerce",
            "shopify",
            "bigcommerce",
            "magento",
            "ecommerce",
            "e-commerce",
            "online shop",
            "webshop",
            "shopping cart",
            "add to cart",
        ],
    ),
    (
        WebsiteFeature::VirtualClasses,
        &[
            "zoom",
            "vimeo",
            "youtube",
            "livestream",
            "live stream",
            "on demand",
            "on-demand",
            "virtual",
            "webinar",
        ],
    ),
    (
        WebsiteFeature::LiveChat,
        &[
            "intercom",
            "drift",
            "zendesk",
            "tawk",
            "livechat",
            "live chat",
            "olark",
            "crisp",
            "messenger",
            "chat",
        ],
    ),
    (
        WebsiteFeature::SocialIntegration,
        &[
            "facebook",
            "instagram",
            "twitter",
            "pinterest",
            "tiktok",
            "linkedin",
            "addthis",
            "sharethis",
            "social",
        ],
    ),
];

/// One boolean per website capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub online_booking: bool,
    pub class_scheduling: bool,
    pub membership_management: bool,
    pub payment_processing: bool,
    pub member_portal: bool,
    pub mobile_responsive: bool,
    pub ecommerce: bool,
    pub virtual_classes: bool,
    pub live_chat: bool,
    pub social_integration: bool,
}

impl FeatureFlags {
    pub fn get(&self, feature: WebsiteFeature) -> bool {
        match feature {
            WebsiteFeature::OnlineBooking => self.online_booking,
            WebsiteFeature::ClassScheduling => self.class_scheduling,
            WebsiteFeature::MembershipManagement => self.membership_management,
            WebsiteFeature::PaymentProcessing => self.payment_processing,
            WebsiteFeature::MemberPortal => self.member_portal,
            WebsiteFeature::MobileResponsive => self.mobile_responsive,
            WebsiteFeature::Ecommerce => self.ecommerce,
            WebsiteFeature::VirtualClasses => self.virtual_classes,
            WebsiteFeature::LiveChat => self.live_chat,
            WebsiteFeature::SocialIntegration => self.social_integration,
        }
    }

    pub fn set(&mut self, feature: WebsiteFeature, value: bool) {
        let slot = match feature {
            WebsiteFeature::OnlineBooking => &mut self.online_booking,
            WebsiteFeature::ClassScheduling => &mut self.class_scheduling,
            WebsiteFeature::MembershipManagement => &mut self.membership_management,
            WebsiteFeature::PaymentProcessing => &mut self.payment_processing,
            WebsiteFeature::MemberPortal => &mut self.member_portal,
            WebsiteFeature::MobileResponsive => &mut self.mobile_responsive,
            WebsiteFeature::Ecommerce => &mut self.ecommerce,
            WebsiteFeature::VirtualClasses => &mut self.virtual_classes,
            WebsiteFeature::LiveChat => &mut self.live_chat,
            WebsiteFeature::SocialIntegration => &mut self.social_integration,
        };
        *slot = value;
    }

    pub fn with(mut self, feature: WebsiteFeature) -> Self {
        self.set(feature, true);
        self
    }

    pub fn all() -> Self {
        WebsiteFeature::ALL
            .into_iter()
            .fold(Self::default(), |flags, feature| flags.with(feature))
    }

    pub fn implemented(&self) -> Vec<WebsiteFeature> {
        WebsiteFeature::ALL
            .into_iter()
            .filter(|f| self.get(*f))
            .collect()
    }

    pub fn missing(&self) -> Vec<WebsiteFeature> {
        WebsiteFeature::ALL
            .into_iter()
            .filter(|f| !self.get(*f))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.implemented().len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebsiteFeatures {
    pub flags: FeatureFlags,
    /// round(100 * implemented / 10)
    pub score: f64,
    pub implemented: Vec<WebsiteFeature>,
    pub missing: Vec<WebsiteFeature>,
    /// Which keyword triggered each feature, or why there was nothing to check
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
    /// False when there was no website or no technology data to inspect
    pub has_data: bool,
}

impl WebsiteFeatures {
    /// Score a set of flags as if they had been detected
    pub fn from_flags(flags: FeatureFlags) -> Self {
        let implemented = flags.implemented();
        let missing = flags.missing();
        let total = WebsiteFeature::ALL.len() as f64;
        let score = (100.0 * implemented.len() as f64 / total).round();
        let recommendations = recommendations(&missing, score);

        Self {
            flags,
            score,
            implemented,
            missing,
            indicators: Vec::new(),
            recommendations,
            has_data: true,
        }
    }

    fn no_data(indicator: &str) -> Self {
        let mut features = Self::from_flags(FeatureFlags::default());
        features.has_data = false;
        features.indicators.push(indicator.to_string());
        features
    }

    pub fn implemented_count(&self) -> usize {
        self.implemented.len()
    }

    pub fn has(&self, feature: WebsiteFeature) -> bool {
        self.flags.get(feature)
    }
}

fn priority_prefix(score: f64) -> &'static str {
    if score < 30.0 {
        "URGENT"
    } else if score < 50.0 {
        "Major improvement"
    } else {
        "Consider"
    }
}

fn recommendations(missing: &[WebsiteFeature], score: f64) -> Vec<String> {
    let prefix = priority_prefix(score);
    missing
        .iter()
        .map(|feature| format!("{}: {}", prefix, feature.action()))
        .collect()
}

/// Check the ten website capabilities against the technology feed
pub fn detect_features(has_website: bool, signals: &[TechnologySignal]) -> WebsiteFeatures {
    if !has_website {
        return WebsiteFeatures::no_data("No website available for feature analysis");
    }
    if signals.is_empty() {
        return WebsiteFeatures::no_data("No technology data available for feature analysis");
    }

    let text = signals
        .iter()
        .map(TechnologySignal::search_text)
        .collect::<Vec<_>>()
        .join(" ");

    let mut flags = FeatureFlags::default();
    let mut indicators = Vec::new();
    for (feature, keywords) in FEATURE_KEYWORDS {
        let matched = matched_keywords(&text, keywords);
        if let Some(first) = matched.first() {
            flags.set(*feature, true);
            indicators.push(format!("{}: {}", feature.label(), first));
        }
    }

    let mut features = WebsiteFeatures::from_flags(flags);
    features.indicators = indicators;
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(name: &str, category: &str) -> TechnologySignal {
        TechnologySignal::new(name, category)
    }

    #[test]
    fn test_comprehensive_stack_detects_most_features() {
        let features = detect_features(
            true,
            &[
                tech("MindBody", "Fitness Management"),
                tech("Stripe", "Payment Processing"),
                tech("Bootstrap", "CSS Framework"),
                tech("Zoom", "Video Conferencing"),
                tech("Facebook Pixel", "Analytics"),
                tech("Intercom", "Live Chat"),
                tech("WooCommerce", "Ecommerce"),
                tech("Member Portal", "Membership"),
            ],
        );
        assert!(features.has_data);
        assert_eq!(features.implemented_count(), 10);
        assert_eq!(features.score, 100.0);
        assert!(features.recommendations.is_empty());
    }

    #[test]
    fn test_basic_stack_gets_urgent_recommendations() {
        let features = detect_features(
            true,
            &[tech("Calendly", "Scheduling"), tech("WordPress", "CMS")],
        );
        assert!(features.has(WebsiteFeature::OnlineBooking));
        assert!(features.has(WebsiteFeature::ClassScheduling));
        assert!(!features.has(WebsiteFeature::PaymentProcessing));
        assert_eq!(features.score, 20.0);
        assert!(features
            .recommendations
            .iter()
            .all(|r| r.starts_with("URGENT: ")));
        assert!(features
            .recommendations
            .iter()
            .any(|r| r.to_lowercase().contains("payment")));
        assert!(features
            .recommendations
            .iter()
            .any(|r| r.to_lowercase().contains("mobile")));
    }

    #[test]
    fn test_no_website_is_not_zero_features() {
        let features = detect_features(false, &[tech("Test", "Test")]);
        assert_eq!(features.score, 0.0);
        assert!(!features.has_data);
        assert_eq!(features.missing.len(), 10);
        assert!(features.indicators[0].starts_with("No website"));

        let features = detect_features(true, &[]);
        assert!(!features.has_data);
        assert!(features.indicators[0].starts_with("No technology data"));
    }

    #[test]
    fn test_priority_prefix_bands() {
        let mid = WebsiteFeatures::from_flags(
            FeatureFlags::default()
                .with(WebsiteFeature::OnlineBooking)
                .with(WebsiteFeature::PaymentProcessing)
                .with(WebsiteFeature::MobileResponsive),
        );
        assert_eq!(mid.score, 30.0);
        assert!(mid.recommendations[0].starts_with("Major improvement: "));

        let mut flags = FeatureFlags::all();
        flags.set(WebsiteFeature::LiveChat, false);
        let high = WebsiteFeatures::from_flags(flags);
        assert_eq!(high.score, 90.0);
        assert_eq!(
            high.recommendations,
            vec!["Consider: Add live chat so prospects get instant answers"]
        );
    }

    #[test]
    fn test_keywords_are_word_anchored() {
        let features = detect_features(true, &[tech("Campaign Tracker", "Marketing")]);
        assert!(!features.has(WebsiteFeature::MobileResponsive));
    }

    #[test]
    fn test_lookalike_product_names_are_not_features() {
        let features = detect_features(
            true,
            &[
                tech("Amplitude", "Analytics"),
                tech("Carto", "Maps"),
                tech("Squarespace", "CMS"),
                tech("Shopkeep Reports", "Analytics"),
            ],
        );
        assert!(!features.has(WebsiteFeature::MobileResponsive));
        assert!(!features.has(WebsiteFeature::Ecommerce));
        assert!(!features.has(WebsiteFeature::PaymentProcessing));
        assert!(features.indicators.is_empty());
        assert_eq!(features.score, 0.0);
    }

    #[test]
    fn test_spelled_out_keywords_still_match() {
        let features = detect_features(
            true,
            &[
                tech("AMP-HTML", "Mobile"),
                tech("Shopping Cart", "Ecommerce"),
                tech("Squareup", "Payment Processing"),
            ],
        );
        assert!(features.has(WebsiteFeature::MobileResponsive));
        assert!(features.has(WebsiteFeature::Ecommerce));
        assert!(features.has(WebsiteFeature::PaymentProcessing));
    }
}
