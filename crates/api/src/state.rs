use quartz_dns_application::use_cases::{
    CreateRecordUseCase, CreateZoneUseCase, DeleteRecordUseCase, DeleteZoneUseCase,
    GetRecordUseCase, GetZoneUseCase, ListRecordsUseCase, ListZonesUseCase, UpdateRecordUseCase,
};
use quartz_dns_domain::ServerStats;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_zone: Arc<CreateZoneUseCase>,
    pub delete_zone: Arc<DeleteZoneUseCase>,
    pub get_zone: Arc<GetZoneUseCase>,
    pub list_zones: Arc<ListZonesUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub stats: Arc<ServerStats>,
}
