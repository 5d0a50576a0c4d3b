pub mod health;
pub mod records;
pub mod stats;
pub mod zones;

pub use health::health_check;
pub use stats::get_stats;
