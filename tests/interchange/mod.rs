//! JSON and YAML round trips (feature `interchange`)

pub mod tests_roundtrip;
