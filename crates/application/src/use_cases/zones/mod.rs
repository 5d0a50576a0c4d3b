pub mod create;
pub mod delete;
pub mod get;
pub mod list;

pub use create::CreateZoneUseCase;
pub use delete::DeleteZoneUseCase;
pub use get::GetZoneUseCase;
pub use list::ListZonesUseCase;
