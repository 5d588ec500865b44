//! Owner subscription plans.

use crate::model::owner::SubscriptionTier;

/// One purchasable owner plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlan {
    pub tier: SubscriptionTier,
    /// Monthly price in AUD.
    pub monthly_price: f64,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    /// Highlighted as the recommended plan.
    pub popular: bool,
}

static PLANS: [SubscriptionPlan; 2] = [
    SubscriptionPlan {
        tier: SubscriptionTier::Basic,
        monthly_price: 9.99,
        description: "Perfect for getting started",
        features: &[
            "Profile Management",
            "Menu Management",
            "Location Updates",
            "Basic Feedback Management",
        ],
        limitations: &["Limited Analytics", "No Custom Branding", "Standard Support"],
        popular: false,
    },
    SubscriptionPlan {
        tier: SubscriptionTier::Premium,
        monthly_price: 29.99,
        description: "For food trucks growing their business",
        features: &[
            "All Basic Features",
            "Advanced Analytics",
            "Custom Branding",
            "Priority Listing in Search",
            "Email Marketing Tools",
            "Priority Support",
            "Social Media Integration",
        ],
        limitations: &[],
        popular: true,
    },
];

/// All plans, cheapest first.
pub fn plans() -> &'static [SubscriptionPlan] {
    &PLANS
}

pub fn plan(tier: SubscriptionTier) -> &'static SubscriptionPlan {
    match tier {
        SubscriptionTier::Basic => &PLANS[0],
        SubscriptionTier::Premium => &PLANS[1],
    }
}
