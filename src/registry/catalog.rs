//! The built-in product table.
//!
//! Signatures are lowercase substrings matched against technology text and
//! URLs. No signature may appear under two products.

use super::{CapabilityEntry, MarketShare, PricingTier, QualityTier, SoftwareCategory};

pub(crate) fn builtin_entries() -> Vec<CapabilityEntry> {
    vec![
        CapabilityEntry {
            name: "MindBody",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Premium,
            founded_year: 2001,
            last_updated: 2024,
            pricing_tier: PricingTier::Premium,
            features: &[
                "scheduling",
                "payments",
                "marketing",
                "reporting",
                "mobile_app",
                "pos",
                "retail",
                "staff_management",
            ],
            technology_stack: &["javascript", "react", "asp.net", "microsoft_azure"],
            signatures: &[
                "mindbodyonline.com",
                "mindbody.io",
                "mb-api",
                "mindbody-widget",
                "healcode",
                "_mb_",
                "mbclient",
                "mindbody api",
                "mindbody",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["quickbooks", "mailchimp", "facebook", "google", "apple_pay", "stripe"],
            market_share: MarketShare::High,
            target_sizes: &["small", "medium", "large"],
            strengths: &["comprehensive_features", "mobile_app", "integrations", "marketing_tools"],
            weaknesses: &["expensive", "complex_setup", "learning_curve"],
            website: "https://www.mindbodyonline.com",
            member_app_rating: Some(85.0),
        },
        CapabilityEntry {
            name: "Zen Planner",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Good,
            founded_year: 2010,
            last_updated: 2024,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "scheduling",
                "payments",
                "member_management",
                "wod_tracking",
                "mobile_app",
                "reporting",
            ],
            technology_stack: &["javascript", "php", "mysql", "aws"],
            signatures: &[
                "zenplanner.com",
                "zp-api",
                "zenplanner-widget",
                "zpapi",
                "zen-planner",
                "zen planner api",
                "zen planner",
                "zenplanner",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "paypal", "mailchimp", "constantcontact"],
            market_share: MarketShare::Medium,
            target_sizes: &["small", "medium"],
            strengths: &["crossfit_focused", "wod_tracking", "affordable", "good_support"],
            weaknesses: &["limited_marketing", "basic_reporting", "outdated_ui"],
            website: "https://zenplanner.com",
            member_app_rating: Some(75.0),
        },
        CapabilityEntry {
            name: "Wodify",
            category: SoftwareCategory::Crossfit,
            quality: QualityTier::Good,
            founded_year: 2012,
            last_updated: 2024,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "wod_tracking",
                "scheduling",
                "payments",
                "performance_tracking",
                "mobile_app",
                "leaderboards",
            ],
            technology_stack: &["javascript", "react", "ruby", "postgresql", "aws"],
            signatures: &[
                "wodify.com",
                "wodify-core",
                "wodify-api",
                "wodify-widget",
                "wodifycore",
                "wodify core",
                "wodify",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "quickbooks", "mailchimp"],
            market_share: MarketShare::Medium,
            target_sizes: &["small", "medium"],
            strengths: &[
                "crossfit_specialized",
                "performance_tracking",
                "community_features",
                "mobile_first",
            ],
            weaknesses: &["crossfit_only", "limited_general_fitness", "pricing"],
            website: "https://www.wodify.com",
            member_app_rating: Some(80.0),
        },
        CapabilityEntry {
            name: "Glofox",
            category: SoftwareCategory::BoutiqueFitness,
            quality: QualityTier::Good,
            founded_year: 2014,
            last_updated: 2024,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "scheduling",
                "payments",
                "mobile_app",
                "marketing",
                "livestreaming",
                "virtual_classes",
            ],
            technology_stack: &["javascript", "react", "node.js", "mongodb", "aws"],
            signatures: &["glofox.com", "glofox-api", "glofox-widget", "gfx-", "glofox-booking", "glofox"],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "zoom", "mailchimp", "facebook", "instagram"],
            market_share: MarketShare::Medium,
            target_sizes: &["small", "medium"],
            strengths: &["boutique_focused", "virtual_classes", "modern_ui", "marketing_tools"],
            weaknesses: &["newer_platform", "limited_large_gym_features", "pricing"],
            website: "https://www.glofox.com",
            member_app_rating: Some(75.0),
        },
        CapabilityEntry {
            name: "TeamUp",
            category: SoftwareCategory::BoutiqueFitness,
            quality: QualityTier::Good,
            founded_year: 2015,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &["scheduling", "payments", "member_management", "mobile_app", "waitlists"],
            technology_stack: &["javascript", "vue.js", "php", "mysql"],
            signatures: &["goteamup.com", "teamup-api", "teamup-widget", "tu-booking", "teamup-schedule"],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "paypal", "mailchimp", "zapier"],
            market_share: MarketShare::Medium,
            target_sizes: &["small", "medium"],
            strengths: &["affordable", "simple_setup", "good_mobile_app", "flexible_pricing"],
            weaknesses: &["limited_features", "basic_reporting", "no_pos"],
            website: "https://goteamup.com",
            member_app_rating: Some(70.0),
        },
        CapabilityEntry {
            name: "WellnessLiving",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Good,
            founded_year: 2016,
            last_updated: 2024,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "scheduling",
                "payments",
                "marketing",
                "mobile_app",
                "pos",
                "rewards",
                "automated_marketing",
            ],
            technology_stack: &["javascript", "php", "mysql", "aws"],
            signatures: &[
                "wellnessliving.com",
                "wl-api",
                "wellnessliving-widget",
                "wlv3",
                "wellness-living",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["quickbooks", "mailchimp", "facebook", "google", "stripe"],
            market_share: MarketShare::Medium,
            target_sizes: &["small", "medium"],
            strengths: &[
                "automated_marketing",
                "rewards_program",
                "comprehensive_features",
                "good_value",
            ],
            weaknesses: &["newer_platform", "limited_customization", "learning_curve"],
            website: "https://www.wellnessliving.com",
            member_app_rating: Some(75.0),
        },
        CapabilityEntry {
            name: "ClubReady",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Average,
            founded_year: 2004,
            last_updated: 2023,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "member_management",
                "billing",
                "access_control",
                "reporting",
                "mobile_app",
                "pos",
            ],
            technology_stack: &["javascript", "asp.net", "sql_server", "azure"],
            signatures: &[
                "clubready.com",
                "cr-api",
                "clubready-widget",
                "clubready-portal",
                "crms",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["quickbooks", "stripe", "paypal", "mailchimp"],
            market_share: MarketShare::Medium,
            target_sizes: &["medium", "large"],
            strengths: &[
                "established_platform",
                "access_control",
                "billing_management",
                "reporting",
            ],
            weaknesses: &["dated_ui", "complex_setup", "expensive", "poor_mobile_experience"],
            website: "https://clubready.com",
            member_app_rating: Some(60.0),
        },
        CapabilityEntry {
            name: "PushPress",
            category: SoftwareCategory::Crossfit,
            quality: QualityTier::Good,
            founded_year: 2013,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &["scheduling", "payments", "wod_tracking", "member_management", "mobile_app"],
            technology_stack: &["javascript", "ruby", "postgresql", "heroku"],
            signatures: &["pushpress.com", "pushpress-api", "pp-widget", "pushpress-core", "ppcore"],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "mailchimp", "quickbooks"],
            market_share: MarketShare::Low,
            target_sizes: &["small"],
            strengths: &["affordable", "crossfit_focused", "simple_setup", "good_support"],
            weaknesses: &["limited_features", "small_market_share", "basic_reporting"],
            website: "https://www.pushpress.com",
            member_app_rating: Some(65.0),
        },
        CapabilityEntry {
            name: "Pike13",
            category: SoftwareCategory::BoutiqueFitness,
            quality: QualityTier::Good,
            founded_year: 2011,
            last_updated: 2024,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "scheduling",
                "payments",
                "client_management",
                "staff_management",
                "mobile_app",
                "reporting",
            ],
            technology_stack: &["javascript", "ruby", "postgresql", "aws"],
            signatures: &["pike13.com", "pike13-api", "p13-widget", "pike13-schedule", "p13api"],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "quickbooks", "mailchimp", "constantcontact"],
            market_share: MarketShare::Low,
            target_sizes: &["small", "medium"],
            strengths: &[
                "service_business_focused",
                "good_scheduling",
                "staff_management",
                "flexible",
            ],
            weaknesses: &["not_gym_specific", "complex_pricing", "learning_curve"],
            website: "https://www.pike13.com",
            member_app_rating: Some(70.0),
        },
        CapabilityEntry {
            name: "Acuity Scheduling",
            category: SoftwareCategory::PersonalTraining,
            quality: QualityTier::Average,
            founded_year: 2006,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &[
                "scheduling",
                "payments",
                "calendar_sync",
                "automated_reminders",
                "intake_forms",
            ],
            technology_stack: &["javascript", "php", "mysql"],
            signatures: &[
                "acuityscheduling.com",
                "acuity-api",
                "acuity-widget",
                "acuity-embed",
                "squarespace-scheduling",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "paypal", "quickbooks", "mailchimp", "zoom"],
            market_share: MarketShare::Medium,
            target_sizes: &["small"],
            strengths: &["affordable", "easy_setup", "good_scheduling", "squarespace_integration"],
            weaknesses: &["not_gym_specific", "limited_features", "no_member_management"],
            website: "https://acuityscheduling.com",
            member_app_rating: None,
        },
        CapabilityEntry {
            name: "Calendly",
            category: SoftwareCategory::PersonalTraining,
            quality: QualityTier::Basic,
            founded_year: 2013,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &[
                "scheduling",
                "calendar_sync",
                "automated_reminders",
                "video_conferencing",
            ],
            technology_stack: &["javascript", "react", "ruby", "postgresql"],
            signatures: &[
                "calendly.com",
                "calendly-widget",
                "calendly-embed",
                "calendly-api",
                "calendly widget",
                "calendly",
            ],
            mobile_app: true,
            api_available: true,
            integrations: &["zoom", "google_meet", "stripe", "paypal", "salesforce"],
            market_share: MarketShare::High,
            target_sizes: &["small"],
            strengths: &["very_affordable", "extremely_easy", "great_integrations", "popular"],
            weaknesses: &[
                "not_gym_specific",
                "no_member_management",
                "no_payments",
                "basic_features",
            ],
            website: "https://calendly.com",
            member_app_rating: None,
        },
        CapabilityEntry {
            name: "ABC Financial",
            category: SoftwareCategory::ChainFranchise,
            quality: QualityTier::Outdated,
            founded_year: 1981,
            last_updated: 2022,
            pricing_tier: PricingTier::Premium,
            features: &[
                "member_management",
                "billing",
                "access_control",
                "reporting",
                "collections",
            ],
            technology_stack: &["asp.net", "sql_server", "legacy_systems"],
            signatures: &["abcfinancial.com", "abc-financial", "abcf-", "abc-billing"],
            mobile_app: false,
            api_available: false,
            integrations: &["limited"],
            market_share: MarketShare::Low,
            target_sizes: &["large"],
            strengths: &["established", "enterprise_focused", "billing_management"],
            weaknesses: &[
                "outdated_technology",
                "poor_ui",
                "expensive",
                "no_mobile",
                "limited_features",
            ],
            website: "https://www.abcfinancial.com",
            member_app_rating: None,
        },
        CapabilityEntry {
            name: "Perfect Gym",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Average,
            founded_year: 2009,
            last_updated: 2023,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "member_management",
                "access_control",
                "billing",
                "mobile_app",
                "reporting",
                "pos",
            ],
            technology_stack: &["javascript", "asp.net", "sql_server", "azure"],
            signatures: &["perfectgym.com", "perfect-gym", "pg-api", "perfectgym-widget"],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "paypal", "quickbooks"],
            market_share: MarketShare::Low,
            target_sizes: &["medium", "large"],
            strengths: &["comprehensive", "access_control", "european_focused"],
            weaknesses: &["complex", "expensive", "limited_us_market", "outdated_ui"],
            website: "https://www.perfectgym.com",
            member_app_rating: None,
        },
        CapabilityEntry {
            name: "My Best Studio",
            category: SoftwareCategory::YogaPilates,
            quality: QualityTier::Average,
            founded_year: 2014,
            last_updated: 2023,
            pricing_tier: PricingTier::Budget,
            features: &[
                "scheduling",
                "payments",
                "member_management",
                "mobile_app",
                "class_packages",
            ],
            technology_stack: &["javascript", "php", "mysql"],
            signatures: &["mybeststudio.com", "mbs-api", "mybeststudio-widget", "mbs-schedule"],
            mobile_app: true,
            api_available: false,
            integrations: &["stripe", "paypal", "mailchimp"],
            market_share: MarketShare::Niche,
            target_sizes: &["small"],
            strengths: &["yoga_focused", "affordable", "class_packages", "simple"],
            weaknesses: &["limited_features", "small_market", "basic_reporting", "no_api"],
            website: "https://www.mybeststudio.com",
            member_app_rating: Some(55.0),
        },
        CapabilityEntry {
            name: "RhinoFit",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Average,
            founded_year: 2006,
            last_updated: 2023,
            pricing_tier: PricingTier::MidRange,
            features: &[
                "member_management",
                "scheduling",
                "billing",
                "pos",
                "access_control",
                "mobile_app",
            ],
            technology_stack: &["javascript", "php", "mysql", "aws"],
            signatures: &["rhinofit.ca", "rhinofit-api", "rhino-fit", "rf-widget"],
            mobile_app: true,
            api_available: true,
            integrations: &["stripe", "quickbooks", "mailchimp"],
            market_share: MarketShare::Niche,
            target_sizes: &["small", "medium"],
            strengths: &["canadian_focused", "comprehensive", "good_support"],
            weaknesses: &["limited_us_market", "dated_ui", "complex_pricing"],
            website: "https://www.rhinofit.ca",
            member_app_rating: Some(55.0),
        },
        CapabilityEntry {
            name: "Square",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Basic,
            founded_year: 2009,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &["payments", "pos", "basic_scheduling", "invoicing", "inventory"],
            technology_stack: &["javascript", "react", "ruby", "java"],
            signatures: &["squareup.com", "square-api", "square-payment", "sq-widget", "square-pos"],
            mobile_app: true,
            api_available: true,
            integrations: &["quickbooks", "mailchimp", "woocommerce", "shopify"],
            market_share: MarketShare::High,
            target_sizes: &["small"],
            strengths: &["very_affordable", "easy_setup", "good_payments", "popular"],
            weaknesses: &[
                "not_gym_specific",
                "no_member_management",
                "basic_scheduling",
                "limited_gym_features",
            ],
            website: "https://squareup.com",
            member_app_rating: None,
        },
        CapabilityEntry {
            name: "Stripe",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Basic,
            founded_year: 2010,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &["payments", "invoicing", "subscriptions", "basic_scheduling"],
            technology_stack: &["javascript", "react", "ruby", "python"],
            signatures: &["stripe.com", "stripe-api", "stripe payment", "stripe-js", "stripe"],
            mobile_app: true,
            api_available: true,
            integrations: &["quickbooks", "mailchimp", "zapier", "many_others"],
            market_share: MarketShare::High,
            target_sizes: &["small"],
            strengths: &["excellent_payments", "easy_integration", "reliable", "popular"],
            weaknesses: &["not_gym_specific", "no_member_management", "limited_gym_features"],
            website: "https://stripe.com",
            member_app_rating: None,
        },
        CapabilityEntry {
            name: "WordPress + Plugins",
            category: SoftwareCategory::AllInOne,
            quality: QualityTier::Basic,
            founded_year: 2003,
            last_updated: 2024,
            pricing_tier: PricingTier::Budget,
            features: &["website", "basic_scheduling", "payments", "blog", "customizable"],
            technology_stack: &["wordpress", "php", "mysql", "javascript"],
            signatures: &[
                "wp-content",
                "wp-includes",
                "wordpress",
                "woocommerce",
                "amelia-booking",
                "bookly",
            ],
            mobile_app: false,
            api_available: true,
            integrations: &["stripe", "paypal", "mailchimp", "woocommerce"],
            market_share: MarketShare::High,
            target_sizes: &["small"],
            strengths: &[
                "very_affordable",
                "highly_customizable",
                "lots_of_plugins",
                "seo_friendly",
            ],
            weaknesses: &[
                "diy_setup",
                "maintenance_required",
                "security_concerns",
                "not_gym_specific",
            ],
            website: "https://wordpress.org",
            member_app_rating: None,
        },
    ]
}
