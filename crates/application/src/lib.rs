//! Quartz DNS Application Layer
pub mod cache_keys;
pub mod ports;
pub mod use_cases;

pub use use_cases::{
    BumpSoaSerialUseCase, CreateRecordUseCase, CreateZoneUseCase, DeleteRecordUseCase,
    DeleteZoneUseCase, GetRecordUseCase, GetZoneUseCase, ListRecordsUseCase, ListZonesUseCase,
    ResolveQueryUseCase, UpdateRecordUseCase,
};
