//! creatorlink - Terminal client for an influencer/brand matching platform
//!
//! This library implements the client-side flows of the creatorlink
//! platform: a landing screen, login and password recovery, and two
//! multi-step signup wizards (creators and businesses) built on one
//! generic wizard engine. The platform backend is stubbed behind
//! injected service traits, so everything runs offline.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Draft data model (choice enums, profile lists, payment card)
//! - `validation`: Field-level input validation
//! - `wizard`: The step-sequencing engine and the two flow catalogs
//! - `services`: Backend ports and their mock implementations
//! - `tui`: The ratatui front end
//!
//! # Example
//!
//! ```rust
//! use creatorlink::wizard::{Audience, Wizard};
//!
//! let mut wizard = Wizard::new(Audience::Creator);
//! wizard.update_draft(|d| d.username = "casey_creates".into());
//! wizard.mark_step_complete(0);
//! wizard.advance();
//! assert_eq!(wizard.current_index(), 1);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;
pub mod validation;
pub mod wizard;

pub use error::{CreatorlinkError, CreatorlinkResult};
