pub mod largest;
pub mod stats;
