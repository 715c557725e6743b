// The analysis core: frame aggregation and c-tf-idf typicality scoring.

pub mod frames;
pub mod frequency;
pub mod matrix;
pub mod scoring;
