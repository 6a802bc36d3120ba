//! Game implementations.

pub mod hit_and_blow;
