//! # folio-core
//!
//! Core types for the portfolio data layer.
//!
//! This crate provides the types shared across all folio crates:
//! - Entity structs for every resource the portfolio renders (profile,
//!   projects, social links, videos) and the system/sync responses
//! - The closed [`SocialIcon`](entities::SocialIcon) enumeration
//! - The featured-project classifier
//! - Static fallback data used when no live source answers
//! - JSON schema lookup for the entity types

pub mod entities;
pub mod errors;
pub mod fallback;
pub mod featured;
pub mod schema;

mod serde_util;

pub use errors::CoreError;
pub use featured::{FeaturedReason, RepoSignals};
