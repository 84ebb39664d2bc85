//! Cross-crate scenario tests for the AgriLink workspace; see `tests/`.
