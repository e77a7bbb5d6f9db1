//! Base canvas generation and text overlay.

pub(crate) mod canvas;
pub(crate) mod composite;
pub(crate) mod overlay;
pub(crate) mod pipeline;
