pub mod games;
pub mod stats;
