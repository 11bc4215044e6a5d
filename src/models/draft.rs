//! The accumulated signup draft
//!
//! One `SignupDraft` collects everything both wizard variants ask for.
//! Each step screen mutates only its own fields; bounded selections and
//! the image gallery enforce their own consistency rules.

use serde::{Deserialize, Serialize};

use super::options::{BudgetRange, Category, ContentVolume, Gender, Industry, Platform};
use super::payment::PaymentCard;
use super::profile::{ContentPackage, ImageGallery, SocialProfileList};

/// Maximum content categories a creator may pick
pub const MAX_CONTENT_CATEGORIES: usize = 5;
/// Maximum brand categories a business may pick
pub const MAX_BRAND_CATEGORIES: usize = 3;
/// Longest allowed profile headline
pub const MAX_HEADLINE_LEN: usize = 60;
/// Longest allowed bio
pub const MAX_BIO_LEN: usize = 500;

/// Outcome of toggling an item in a bounded selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The item was added
    Added,
    /// The item was already selected and has been removed
    Removed,
    /// The selection is at its maximum; nothing changed
    Rejected,
}

/// An ordered multi-select with an optional maximum cardinality
///
/// Additions past the maximum are rejected outright, never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedSelection<T> {
    items: Vec<T>,
    max: Option<usize>,
}

impl<T: Copy + Eq> BoundedSelection<T> {
    /// Create a selection capped at `max` items
    pub fn with_max(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max: Some(max),
        }
    }

    /// Create a selection with no upper bound
    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            max: None,
        }
    }

    /// Toggle membership of `item`
    pub fn toggle(&mut self, item: T) -> Toggle {
        if let Some(pos) = self.items.iter().position(|i| *i == item) {
            self.items.remove(pos);
            return Toggle::Removed;
        }
        if let Some(max) = self.max {
            if self.items.len() >= max {
                return Toggle::Rejected;
            }
        }
        self.items.push(item);
        Toggle::Added
    }

    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cap, if this selection has one
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// A phone number split into dial code and national digits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Country dial code, e.g. "+44"
    pub country_code: String,

    /// The rest of the number as entered
    pub number: String,
}

impl PhoneNumber {
    /// Display form: "+44 7700 900123"
    pub fn formatted(&self) -> String {
        format!("{} {}", self.country_code, self.number)
    }
}

/// Everything collected across both signup wizards
///
/// Created empty at wizard entry; fields stay at their defaults until a
/// step commits them. Business-only fields remain empty in the creator
/// flow and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupDraft {
    // Identity
    pub username: String,
    pub full_name: String,
    pub brand_name: String,
    pub email: String,
    pub password: String,
    pub email_verified: bool,

    // Creator profile
    pub location: String,
    pub headline: String,
    pub bio: String,
    pub gender: Option<Gender>,
    pub social_profiles: SocialProfileList,
    pub content_categories: BoundedSelection<Category>,
    pub images: ImageGallery,
    pub packages: Vec<ContentPackage>,
    pub phone: PhoneNumber,
    pub phone_verified: bool,
    pub payment: Option<PaymentCard>,

    // Business profile
    pub industry: Option<Industry>,
    pub brand_categories: BoundedSelection<Category>,
    pub platforms: BoundedSelection<Platform>,
    pub content_volume: Option<ContentVolume>,
    pub budget: Option<BudgetRange>,
}

impl SignupDraft {
    /// Create an empty draft with the field caps wired in
    pub fn new() -> Self {
        Self {
            username: String::new(),
            full_name: String::new(),
            brand_name: String::new(),
            email: String::new(),
            password: String::new(),
            email_verified: false,
            location: String::new(),
            headline: String::new(),
            bio: String::new(),
            gender: None,
            social_profiles: SocialProfileList::new(),
            content_categories: BoundedSelection::with_max(MAX_CONTENT_CATEGORIES),
            images: ImageGallery::new(),
            packages: Vec::new(),
            phone: PhoneNumber::default(),
            phone_verified: false,
            payment: None,
            industry: None,
            brand_categories: BoundedSelection::with_max(MAX_BRAND_CATEGORIES),
            platforms: BoundedSelection::unbounded(),
            content_volume: None,
            budget: None,
        }
    }
}

impl Default for SignupDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_selection_rejects_past_max() {
        let mut selection = BoundedSelection::with_max(3);
        assert_eq!(selection.toggle(Category::Fashion), Toggle::Added);
        assert_eq!(selection.toggle(Category::Beauty), Toggle::Added);
        assert_eq!(selection.toggle(Category::Travel), Toggle::Added);

        // Fourth selection is rejected, not truncated
        assert_eq!(selection.toggle(Category::Tech), Toggle::Rejected);
        assert_eq!(selection.len(), 3);
        assert!(!selection.contains(Category::Tech));
    }

    #[test]
    fn test_bounded_selection_toggle_off_frees_a_slot() {
        let mut selection = BoundedSelection::with_max(2);
        selection.toggle(Category::Fashion);
        selection.toggle(Category::Beauty);

        assert_eq!(selection.toggle(Category::Beauty), Toggle::Removed);
        assert_eq!(selection.toggle(Category::Tech), Toggle::Added);
        assert_eq!(selection.items(), &[Category::Fashion, Category::Tech]);
    }

    #[test]
    fn test_unbounded_selection() {
        let mut selection = BoundedSelection::unbounded();
        for platform in Platform::ALL {
            assert_eq!(selection.toggle(platform), Toggle::Added);
        }
        assert_eq!(selection.len(), Platform::ALL.len());
        assert_eq!(selection.max(), None);
    }

    #[test]
    fn test_draft_starts_empty() {
        let draft = SignupDraft::new();
        assert!(draft.username.is_empty());
        assert!(!draft.email_verified);
        assert!(draft.content_categories.is_empty());
        assert_eq!(
            draft.content_categories.max(),
            Some(MAX_CONTENT_CATEGORIES)
        );
        assert_eq!(draft.brand_categories.max(), Some(MAX_BRAND_CATEGORIES));
        assert!(draft.payment.is_none());
    }

    #[test]
    fn test_phone_formatting() {
        let phone = PhoneNumber {
            country_code: "+44".into(),
            number: "7700 900123".into(),
        };
        assert_eq!(phone.formatted(), "+44 7700 900123");
    }

    #[test]
    fn test_draft_serde_round_trip() {
        let mut draft = SignupDraft::new();
        draft.username = "casey_creates".into();
        draft.content_categories.toggle(Category::Travel);
        draft.gender = Some(Gender::NonBinary);

        let json = serde_json::to_string(&draft).unwrap();
        let back: SignupDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, back);
    }
}
