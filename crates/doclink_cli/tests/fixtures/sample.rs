//! Sample module.

/// Parses input. See @doc docs/parser.md:L12
pub fn parse() {}

// @see README.md
pub fn run() {}
