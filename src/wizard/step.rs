//! Step descriptors and the two onboarding flows
//!
//! A flow is data: an ordered list of descriptors the engine walks.
//! Creator and business onboarding share the engine and differ only in
//! their catalogs.

use serde::{Deserialize, Serialize};

/// Every screen either wizard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    // Shared identity steps
    Username,
    AccountDetails,
    VerifyEmail,

    // Creator profile
    Location,
    Headline,
    Bio,
    Gender,
    SocialProfiles,
    ContentCategories,
    ContentImages,
    ContentPackages,
    VerifyPhone,
    Payment,

    // Business profile
    Industry,
    BrandCategories,
    TargetPlatforms,
    ContentVolume,
    CampaignBudget,
}

/// One entry in a flow catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: StepId,
    /// Heading shown above the step
    pub title: &'static str,
    /// One-line explanation under the heading
    pub description: &'static str,
    /// Whether the user may move past this step without completing it.
    /// Identity, verification, and payment steps are never skippable.
    pub skippable: bool,
}

/// Which onboarding variant a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Creator,
    Business,
}

impl Audience {
    /// The step catalog for this variant
    pub fn steps(&self) -> &'static [StepDescriptor] {
        match self {
            Audience::Creator => CREATOR_STEPS,
            Audience::Business => BUSINESS_STEPS,
        }
    }
}

/// Creator onboarding, in order
pub const CREATOR_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: StepId::Username,
        title: "Claim your username",
        description: "Choose a unique username for your profile",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::AccountDetails,
        title: "Create your account",
        description: "Get started with your content creator journey",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::VerifyEmail,
        title: "Verify your email",
        description: "Enter the 6-digit code we sent to your email",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::Location,
        title: "Where are you located?",
        description: "Help brands find you for location-based campaigns",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::Headline,
        title: "Introduce yourself",
        description: "Add a title that will be shown on your profile",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::Bio,
        title: "Describe yourself",
        description: "Tell us about you and your content",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::Gender,
        title: "What's your gender?",
        description: "This helps brands find creators for targeted campaigns",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::SocialProfiles,
        title: "Add your social channels",
        description: "Connect your social profiles and share your follower count",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::ContentCategories,
        title: "What content do you create?",
        description: "Select categories that describe your content",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::ContentImages,
        title: "Add your content",
        description: "Upload images of you and your content (3 minimum + profile picture)",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::ContentPackages,
        title: "Your content packages",
        description: "Set up the content packages you offer with pricing",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::VerifyPhone,
        title: "Verify your phone",
        description: "Add your phone number to get notified of new orders",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::Payment,
        title: "Add payment method",
        description: "Add a payment method to receive payments from brands",
        skippable: false,
    },
];

/// Business onboarding, in order
pub const BUSINESS_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: StepId::Username,
        title: "Claim your username",
        description: "Choose a unique username for your brand",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::AccountDetails,
        title: "Create your account",
        description: "Start finding creators for your brand",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::VerifyEmail,
        title: "Verify your email",
        description: "Enter the 6-digit code we sent to your email",
        skippable: false,
    },
    StepDescriptor {
        id: StepId::Industry,
        title: "What industry are you in?",
        description: "Tell us what kind of business you run",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::BrandCategories,
        title: "What describes your brand?",
        description: "Select categories that best describe your brand",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::TargetPlatforms,
        title: "Where do you want content?",
        description: "Pick the platforms you want campaigns on",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::ContentVolume,
        title: "How much content do you need?",
        description: "Estimate how many pieces you need per month",
        skippable: true,
    },
    StepDescriptor {
        id: StepId::CampaignBudget,
        title: "What's your monthly budget?",
        description: "Pick the range that fits your campaign spend",
        skippable: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_flow_lengths() {
        assert_eq!(CREATOR_STEPS.len(), 13);
        assert_eq!(BUSINESS_STEPS.len(), 8);
    }

    #[test]
    fn test_no_duplicate_steps_within_a_flow() {
        for steps in [CREATOR_STEPS, BUSINESS_STEPS] {
            let ids: HashSet<StepId> = steps.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), steps.len());
        }
    }

    #[test]
    fn test_identity_steps_are_not_skippable() {
        for steps in [CREATOR_STEPS, BUSINESS_STEPS] {
            for step in steps {
                if matches!(
                    step.id,
                    StepId::Username | StepId::AccountDetails | StepId::VerifyEmail
                ) {
                    assert!(!step.skippable, "{:?} must not be skippable", step.id);
                }
            }
        }
    }

    #[test]
    fn test_shared_prefix() {
        for i in 0..3 {
            assert_eq!(CREATOR_STEPS[i].id, BUSINESS_STEPS[i].id);
        }
    }

    #[test]
    fn test_audience_lookup() {
        assert_eq!(Audience::Creator.steps().len(), CREATOR_STEPS.len());
        assert_eq!(Audience::Business.steps().len(), BUSINESS_STEPS.len());
    }
}
