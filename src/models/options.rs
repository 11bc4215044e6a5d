//! Enumerated choice fields collected during onboarding
//!
//! Every single- and multi-choice step picks from one of these enums.
//! The serialized names match the platform API's kebab-case identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content/brand category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fashion,
    Beauty,
    Travel,
    FoodDrink,
    Tech,
    Finance,
    Health,
    Education,
    Entertainment,
    Sports,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::Fashion,
        Category::Beauty,
        Category::Travel,
        Category::FoodDrink,
        Category::Tech,
        Category::Finance,
        Category::Health,
        Category::Education,
        Category::Entertainment,
        Category::Sports,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fashion => write!(f, "Fashion"),
            Self::Beauty => write!(f, "Beauty"),
            Self::Travel => write!(f, "Travel"),
            Self::FoodDrink => write!(f, "Food & Drink"),
            Self::Tech => write!(f, "Technology"),
            Self::Finance => write!(f, "Finance"),
            Self::Health => write!(f, "Health & Wellness"),
            Self::Education => write!(f, "Education"),
            Self::Entertainment => write!(f, "Entertainment"),
            Self::Sports => write!(f, "Sports & Fitness"),
        }
    }
}

/// Industry a business operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Agency,
    Ecommerce,
    WebsiteApp,
    BrickMortar,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Agency,
        Industry::Ecommerce,
        Industry::WebsiteApp,
        Industry::BrickMortar,
        Industry::Other,
    ];
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Agency => write!(f, "Agency"),
            Self::Ecommerce => write!(f, "Ecommerce"),
            Self::WebsiteApp => write!(f, "Website/App"),
            Self::BrickMortar => write!(f, "Brick & Mortar"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A distribution platform, used both for creators' social channels and
/// for the platforms a business wants campaigns on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Instagram,
    Tiktok,
    Twitter,
    Youtube,
    Twitch,
    Amazon,
    Website,
    Ugc,
}

impl Platform {
    /// Platforms a creator can link a profile on (UGC has no profile URL)
    pub const SOCIAL: [Platform; 7] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Twitter,
        Platform::Youtube,
        Platform::Twitch,
        Platform::Amazon,
        Platform::Website,
    ];

    /// Everything a business can target
    pub const ALL: [Platform; 8] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Twitter,
        Platform::Youtube,
        Platform::Twitch,
        Platform::Amazon,
        Platform::Website,
        Platform::Ugc,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instagram => write!(f, "Instagram"),
            Self::Tiktok => write!(f, "TikTok"),
            Self::Twitter => write!(f, "Twitter/X"),
            Self::Youtube => write!(f, "YouTube"),
            Self::Twitch => write!(f, "Twitch"),
            Self::Amazon => write!(f, "Amazon"),
            Self::Website => write!(f, "Website"),
            Self::Ugc => write!(f, "UGC"),
        }
    }
}

/// How many pieces of content a business expects per month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentVolume {
    #[serde(rename = "0-5")]
    UpToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10-20")]
    TenToTwenty,
    #[serde(rename = "20-50")]
    TwentyToFifty,
    #[serde(rename = "50+")]
    FiftyPlus,
}

impl ContentVolume {
    pub const ALL: [ContentVolume; 5] = [
        ContentVolume::UpToFive,
        ContentVolume::FiveToTen,
        ContentVolume::TenToTwenty,
        ContentVolume::TwentyToFifty,
        ContentVolume::FiftyPlus,
    ];
}

impl fmt::Display for ContentVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToFive => write!(f, "0-5 pieces"),
            Self::FiveToTen => write!(f, "5-10 pieces"),
            Self::TenToTwenty => write!(f, "10-20 pieces"),
            Self::TwentyToFifty => write!(f, "20-50 pieces"),
            Self::FiftyPlus => write!(f, "50+ pieces"),
        }
    }
}

/// Monthly campaign budget bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "under-10k")]
    Under10k,
    #[serde(rename = "10k-50k")]
    From10kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-500k")]
    From100kTo500k,
    #[serde(rename = "500k+")]
    Over500k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 5] = [
        BudgetRange::Under10k,
        BudgetRange::From10kTo50k,
        BudgetRange::From50kTo100k,
        BudgetRange::From100kTo500k,
        BudgetRange::Over500k,
    ];
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under10k => write!(f, "Under $10,000"),
            Self::From10kTo50k => write!(f, "$10,000 - $50,000"),
            Self::From50kTo100k => write!(f, "$50,000 - $100,000"),
            Self::From100kTo500k => write!(f, "$100,000 - $500,000"),
            Self::Over500k => write!(f, "$500,000+"),
        }
    }
}

/// Self-reported gender, used for campaign targeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::NonBinary => write!(f, "Non-binary"),
            Self::PreferNotToSay => write!(f, "Prefer not to say"),
        }
    }
}

/// Coarse follower-count bracket for a social profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowerRange {
    #[serde(rename = "under-1k")]
    Under1k,
    #[serde(rename = "1k-5k")]
    From1kTo5k,
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-50k")]
    From10kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-500k")]
    From100kTo500k,
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    #[serde(rename = "over-1m")]
    Over1m,
}

impl FollowerRange {
    pub const ALL: [FollowerRange; 8] = [
        FollowerRange::Under1k,
        FollowerRange::From1kTo5k,
        FollowerRange::From5kTo10k,
        FollowerRange::From10kTo50k,
        FollowerRange::From50kTo100k,
        FollowerRange::From100kTo500k,
        FollowerRange::From500kTo1m,
        FollowerRange::Over1m,
    ];
}

impl fmt::Display for FollowerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under1k => write!(f, "Under 1,000"),
            Self::From1kTo5k => write!(f, "1,000 - 5,000"),
            Self::From5kTo10k => write!(f, "5,000 - 10,000"),
            Self::From10kTo50k => write!(f, "10,000 - 50,000"),
            Self::From50kTo100k => write!(f, "50,000 - 100,000"),
            Self::From100kTo500k => write!(f, "100,000 - 500,000"),
            Self::From500kTo1m => write!(f, "500,000 - 1,000,000"),
            Self::Over1m => write!(f, "Over 1,000,000"),
        }
    }
}

/// Deliverable type a creator sells as a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    InstagramPost,
    InstagramReel,
    Tiktok,
    Tweet,
    Youtube,
    Other,
}

impl PackageKind {
    pub const ALL: [PackageKind; 6] = [
        PackageKind::InstagramPost,
        PackageKind::InstagramReel,
        PackageKind::Tiktok,
        PackageKind::Tweet,
        PackageKind::Youtube,
        PackageKind::Other,
    ];
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstagramPost => write!(f, "Instagram Post"),
            Self::InstagramReel => write!(f, "Instagram Reel"),
            Self::Tiktok => write!(f, "TikTok Video"),
            Self::Tweet => write!(f, "Twitter/X Post"),
            Self::Youtube => write!(f, "YouTube Video"),
            Self::Other => write!(f, "Other Content"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_serialization() {
        assert_eq!(
            serde_json::to_string(&Category::FoodDrink).unwrap(),
            "\"food-drink\""
        );
        assert_eq!(
            serde_json::to_string(&Industry::BrickMortar).unwrap(),
            "\"brick-mortar\""
        );
        assert_eq!(
            serde_json::to_string(&ContentVolume::FiftyPlus).unwrap(),
            "\"50+\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetRange::Under10k).unwrap(),
            "\"under-10k\""
        );
    }

    #[test]
    fn test_round_trip() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            let back: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(platform, back);
        }
    }

    #[test]
    fn test_social_excludes_ugc() {
        assert!(!Platform::SOCIAL.contains(&Platform::Ugc));
        assert!(Platform::ALL.contains(&Platform::Ugc));
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::FoodDrink.to_string(), "Food & Drink");
        assert_eq!(Gender::PreferNotToSay.to_string(), "Prefer not to say");
        assert_eq!(BudgetRange::Over500k.to_string(), "$500,000+");
    }
}
