//! Data model types for extension config generation.

mod dial_group;
mod extension;

pub use dial_group::DialGroup;
pub use extension::{AuthMethod, ExtensionRecord};
