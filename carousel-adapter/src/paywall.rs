use alloc::string::{String, ToString};
use alloc::vec::Vec;

use carousel::CarouselOptions;

/// A purchasable plan shown as one carousel card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub title: String,
    pub price: String,
    pub subtitle: String,
}

impl Plan {
    pub fn new(title: &str, price: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            price: price.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Accent color of a feature icon, named semantically so hosts map it onto their own theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tint {
    Blue,
    Green,
    Orange,
    Pink,
    /// The host's primary label color.
    Label,
}

/// One row of the feature list above the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    /// Symbolic icon name; resolving it to an image is up to the host.
    pub icon: String,
    pub text: String,
    pub tint: Tint,
}

impl Feature {
    pub fn new(icon: &str, text: &str, tint: Tint) -> Self {
        Self {
            icon: icon.to_string(),
            text: text.to_string(),
            tint,
        }
    }
}

/// Static content of the upgrade screen: heading, feature list, plans and the call to action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paywall {
    pub title: String,
    pub features: Vec<Feature>,
    pub plans: Vec<Plan>,
    pub action: String,
}

impl Paywall {
    /// The "Upgrade Canary Mail" screen.
    pub fn canary_upgrade() -> Self {
        let tiers = [
            Plan::new("Growth\niOS", "$20", "Yearly\n$1.67/month"),
            Plan::new("Pro\niOS", "$30", "Yearly\n$2.50/month"),
            Plan::new("Premium\niOS", "$40", "Yearly\n$3.33/month"),
            Plan::new("PRO+\niOS", "$60", "Yearly\n$3.33/month"),
            Plan::new("Basic\nAll Performance", "$4", "Monthly"),
        ];
        // The carousel lists the tiers twice.
        let plans = tiers.iter().chain(tiers.iter()).cloned().collect();

        let features = Vec::from([
            Feature::new("sparkles", "AI Copilot (Summarize , Search)", Tint::Blue),
            Feature::new("checkmark", "Read Receipts (Extended History)", Tint::Green),
            Feature::new("paperplane", "Send Later", Tint::Blue),
            Feature::new("calendar", "Calendar & Scheduling", Tint::Orange),
            Feature::new("wand.and.stars", "Inbox Cleaner", Tint::Blue),
            Feature::new("puzzlepiece.extension", "App Integrations", Tint::Label),
            Feature::new("slider.horizontal.3", "Advanced Customization", Tint::Pink),
        ]);

        Self {
            title: "Upgrade Canary Mail".to_string(),
            features,
            plans,
            action: "Continue".to_string(),
        }
    }

    pub fn plan(&self, index: usize) -> Option<&Plan> {
        self.plans.get(index)
    }

    /// Layout options for a carousel holding this screen's plans.
    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions::new(self.plans.len())
    }
}
