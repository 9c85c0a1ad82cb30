//! CLI subcommand implementations.

pub mod fetch;
pub mod normalize;
pub mod pages;
