//! JSON-facing scene description and its validation.

pub(crate) mod config;
