pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

mod invalidation;

pub use create::CreateRecordUseCase;
pub use delete::DeleteRecordUseCase;
pub use get::GetRecordUseCase;
pub use list::ListRecordsUseCase;
pub use update::UpdateRecordUseCase;
