/// Generation driver and per-cell orchestration
pub mod executor;

pub use executor::PatternGenerator;
