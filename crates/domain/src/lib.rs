//! Quartz DNS Domain Layer
pub mod config;
pub mod errors;
pub mod record;
pub mod record_data;
pub mod record_name;
pub mod record_type;
pub mod stats;
pub mod ttl;
pub mod zone;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use record::Record;
pub use record_data::{CaaData, SoaData, SrvData};
pub use record_type::RecordType;
pub use stats::{ServerStats, StatsSnapshot};
pub use zone::Zone;
