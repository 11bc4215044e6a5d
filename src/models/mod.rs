//! Core data models for creatorlink
//!
//! This module contains the data structures accumulated during
//! onboarding: choice enumerations, profile building blocks, payment
//! details, and the signup draft itself.

pub mod draft;
pub mod ids;
pub mod options;
pub mod payment;
pub mod price;
pub mod profile;

pub use draft::{BoundedSelection, PhoneNumber, SignupDraft, Toggle};
pub use ids::SessionId;
pub use options::{
    BudgetRange, Category, ContentVolume, FollowerRange, Gender, Industry, PackageKind, Platform,
};
pub use payment::{PaymentCard, PaymentCardError};
pub use price::Price;
pub use profile::{
    ContentImage, ContentPackage, GalleryError, ImageGallery, SocialProfile, SocialProfileError,
    SocialProfileList,
};
