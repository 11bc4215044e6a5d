//! Creator profile building blocks
//!
//! Structured list fields accumulated during onboarding: linked social
//! channels, the content image gallery, and sellable content packages.
//! The list types own their consistency rules so no caller can put the
//! draft into an invalid shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::{FollowerRange, PackageKind, Platform};
use super::price::Price;

/// A linked social channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    /// Which platform the profile lives on
    pub platform: Platform,

    /// Full profile URL
    pub url: String,

    /// Self-reported follower bracket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<FollowerRange>,
}

/// The set of linked social channels, at most one per platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialProfileList {
    profiles: Vec<SocialProfile>,
}

impl SocialProfileList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile; rejects a second entry for the same platform
    pub fn add(&mut self, profile: SocialProfile) -> Result<(), SocialProfileError> {
        if self.profiles.iter().any(|p| p.platform == profile.platform) {
            return Err(SocialProfileError::PlatformAlreadyAdded(profile.platform));
        }
        self.profiles.push(profile);
        Ok(())
    }

    /// Remove the profile at `index`; out-of-range is a no-op
    pub fn remove(&mut self, index: usize) {
        if index < self.profiles.len() {
            self.profiles.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocialProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.profiles.clear();
    }
}

/// Errors when adding a social profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialProfileError {
    PlatformAlreadyAdded(Platform),
}

impl fmt::Display for SocialProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlatformAlreadyAdded(p) => {
                write!(f, "You've already added a {} profile", p)
            }
        }
    }
}

impl std::error::Error for SocialProfileError {}

/// One uploaded content image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentImage {
    /// Where the upload landed (the mock backend hands back a placeholder)
    pub url: String,

    /// Whether this image is the profile picture
    #[serde(default)]
    pub is_profile_picture: bool,
}

/// The content image gallery
///
/// Holds between [`ImageGallery::MIN_IMAGES`] and
/// [`ImageGallery::MAX_IMAGES`] images once submitted. At most one image
/// carries the profile-picture flag; choosing a new one clears the old.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageGallery {
    images: Vec<ContentImage>,
}

impl ImageGallery {
    /// Minimum images required to finish the step
    pub const MIN_IMAGES: usize = 3;
    /// Maximum images the gallery accepts
    pub const MAX_IMAGES: usize = 10;

    /// Create an empty gallery
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image by URL; rejects additions past the maximum
    pub fn add(&mut self, url: impl Into<String>) -> Result<(), GalleryError> {
        if self.images.len() >= Self::MAX_IMAGES {
            return Err(GalleryError::Full);
        }
        self.images.push(ContentImage {
            url: url.into(),
            is_profile_picture: false,
        });
        Ok(())
    }

    /// Remove the image at `index`; out-of-range is a no-op
    pub fn remove(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Mark the image at `index` as the profile picture, clearing the
    /// flag on every other image
    pub fn set_profile_picture(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::NoSuchImage(index));
        }
        for (i, image) in self.images.iter_mut().enumerate() {
            image.is_profile_picture = i == index;
        }
        Ok(())
    }

    /// Index of the current profile picture, if one is chosen
    pub fn profile_picture(&self) -> Option<usize> {
        self.images.iter().position(|img| img.is_profile_picture)
    }

    /// Whether the gallery satisfies the submission rules: enough
    /// images and a chosen profile picture
    pub fn is_submittable(&self) -> bool {
        self.images.len() >= Self::MIN_IMAGES && self.profile_picture().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentImage> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}

/// Errors from gallery mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    Full,
    NoSuchImage(usize),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "Maximum {} images allowed", ImageGallery::MAX_IMAGES),
            Self::NoSuchImage(i) => write!(f, "No image at position {}", i),
        }
    }
}

impl std::error::Error for GalleryError {}

/// A sellable content package: one deliverable with a description and rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPackage {
    /// Deliverable type
    pub kind: PackageKind,

    /// What's included in the package
    pub description: String,

    /// Asking rate
    pub price: Price,
}

impl ContentPackage {
    /// Create a package with the default deliverable type and no rate
    pub fn new() -> Self {
        Self {
            kind: PackageKind::InstagramPost,
            description: String::new(),
            price: Price::zero(),
        }
    }

    /// A package is sellable once it has a description and a positive rate
    pub fn is_complete(&self) -> bool {
        !self.description.trim().is_empty() && self.price.is_positive()
    }
}

impl Default for ContentPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_profiles_unique_per_platform() {
        let mut list = SocialProfileList::new();
        list.add(SocialProfile {
            platform: Platform::Instagram,
            url: "https://instagram.com/casey".into(),
            followers: Some(FollowerRange::From10kTo50k),
        })
        .unwrap();

        let dup = list.add(SocialProfile {
            platform: Platform::Instagram,
            url: "https://instagram.com/other".into(),
            followers: None,
        });
        assert_eq!(
            dup,
            Err(SocialProfileError::PlatformAlreadyAdded(Platform::Instagram))
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_social_profile_remove() {
        let mut list = SocialProfileList::new();
        list.add(SocialProfile {
            platform: Platform::Youtube,
            url: "https://youtube.com/@casey".into(),
            followers: None,
        })
        .unwrap();

        list.remove(5); // out of range, no-op
        assert_eq!(list.len(), 1);

        list.remove(0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_gallery_single_profile_picture() {
        let mut gallery = ImageGallery::new();
        for i in 0..3 {
            gallery.add(format!("upload://image-{}", i)).unwrap();
        }

        gallery.set_profile_picture(0).unwrap();
        gallery.set_profile_picture(2).unwrap();

        let flagged: Vec<usize> = gallery
            .iter()
            .enumerate()
            .filter(|(_, img)| img.is_profile_picture)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(flagged, vec![2]);
        assert_eq!(gallery.profile_picture(), Some(2));
    }

    #[test]
    fn test_gallery_rejects_overflow() {
        let mut gallery = ImageGallery::new();
        for i in 0..ImageGallery::MAX_IMAGES {
            gallery.add(format!("upload://image-{}", i)).unwrap();
        }
        assert_eq!(gallery.add("upload://one-too-many"), Err(GalleryError::Full));
        assert_eq!(gallery.len(), ImageGallery::MAX_IMAGES);
    }

    #[test]
    fn test_gallery_submittable() {
        let mut gallery = ImageGallery::new();
        gallery.add("upload://a").unwrap();
        gallery.add("upload://b").unwrap();
        gallery.add("upload://c").unwrap();
        assert!(!gallery.is_submittable()); // no profile picture yet

        gallery.set_profile_picture(1).unwrap();
        assert!(gallery.is_submittable());

        gallery.remove(1);
        assert!(!gallery.is_submittable()); // below minimum and flag gone
    }

    #[test]
    fn test_set_profile_picture_out_of_range() {
        let mut gallery = ImageGallery::new();
        gallery.add("upload://a").unwrap();
        assert_eq!(
            gallery.set_profile_picture(3),
            Err(GalleryError::NoSuchImage(3))
        );
    }

    #[test]
    fn test_package_completeness() {
        let mut pkg = ContentPackage::new();
        assert!(!pkg.is_complete());

        pkg.description = "One feed post with two stories".into();
        assert!(!pkg.is_complete());

        pkg.price = Price::from_cents(14999);
        assert!(pkg.is_complete());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut gallery = ImageGallery::new();
        gallery.add("upload://a").unwrap();
        gallery.set_profile_picture(0).unwrap();

        let json = serde_json::to_string(&gallery).unwrap();
        let back: ImageGallery = serde_json::from_str(&json).unwrap();
        assert_eq!(gallery, back);
    }
}
