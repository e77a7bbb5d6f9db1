//! Font loading, measurement and line breaking.

pub(crate) mod bitmap;
pub(crate) mod font;
pub(crate) mod wrap;
