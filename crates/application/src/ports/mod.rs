mod record_cache;
mod record_repository;
mod zone_repository;

pub use record_cache::{CacheTtl, RecordCache};
pub use record_repository::RecordRepository;
pub use zone_repository::ZoneRepository;
