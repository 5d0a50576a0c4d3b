pub mod records;
pub mod resolve_query;
pub mod soa;
pub mod zones;

// Re-export use cases
pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordUseCase, ListRecordsUseCase,
    UpdateRecordUseCase,
};
pub use resolve_query::ResolveQueryUseCase;
pub use soa::BumpSoaSerialUseCase;
pub use zones::{CreateZoneUseCase, DeleteZoneUseCase, GetZoneUseCase, ListZonesUseCase};
