pub mod record;
pub mod stats;
pub mod zone;

pub use record::{CreateRecordRequest, RecordResponse, UpdateRecordRequest};
pub use stats::StatsResponse;
pub use zone::{CreateZoneRequest, ZoneResponse};
