//! Reference folder convention and resolution.

pub(crate) mod resolver;
