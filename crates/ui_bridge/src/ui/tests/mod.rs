//! Shared test doubles and end-to-end frame scenarios

pub(crate) mod support;
