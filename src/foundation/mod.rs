//! Shared building blocks: error taxonomy, color primitives and settings.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod settings;
