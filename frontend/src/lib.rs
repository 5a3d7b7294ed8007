pub mod app;
mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod filter;
pub mod notification;
pub mod overlays;
pub mod scroll;
pub mod share;
mod theme;
pub mod types;
pub mod validation;

pub use config::SiteConfig;
pub use types::{CardFacts, FilterCriteria, NotificationKind, NotificationRequest, SharePayload};
