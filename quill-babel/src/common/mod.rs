//! Contains logic for mapping between different document representations.

pub mod nested_to_flat;
