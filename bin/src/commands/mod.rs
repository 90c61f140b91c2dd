//! CLI command implementations.

pub(crate) mod payload;
pub(crate) mod quote;
pub(crate) mod sizes;
