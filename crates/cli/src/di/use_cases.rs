use super::Repositories;
use quartz_dns_application::use_cases::{
    BumpSoaSerialUseCase, CreateRecordUseCase, CreateZoneUseCase, DeleteRecordUseCase,
    DeleteZoneUseCase, GetRecordUseCase, GetZoneUseCase, ListRecordsUseCase, ListZonesUseCase,
    ResolveQueryUseCase, UpdateRecordUseCase,
};
use quartz_dns_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub create_zone: Arc<CreateZoneUseCase>,
    pub delete_zone: Arc<DeleteZoneUseCase>,
    pub get_zone: Arc<GetZoneUseCase>,
    pub list_zones: Arc<ListZonesUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub resolve_query: Arc<ResolveQueryUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let bump_serial = Arc::new(BumpSoaSerialUseCase::new(
            repos.records.clone(),
            repos.cache.clone(),
            config.soa.clone(),
        ));

        Self {
            create_zone: Arc::new(CreateZoneUseCase::new(
                repos.zones.clone(),
                bump_serial.clone(),
            )),
            delete_zone: Arc::new(DeleteZoneUseCase::new(
                repos.zones.clone(),
                repos.cache.clone(),
            )),
            get_zone: Arc::new(GetZoneUseCase::new(repos.zones.clone())),
            list_zones: Arc::new(ListZonesUseCase::new(repos.zones.clone())),
            create_record: Arc::new(CreateRecordUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
                repos.cache.clone(),
                bump_serial.clone(),
            )),
            update_record: Arc::new(UpdateRecordUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
                repos.cache.clone(),
                bump_serial.clone(),
            )),
            delete_record: Arc::new(DeleteRecordUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
                repos.cache.clone(),
                bump_serial,
            )),
            get_record: Arc::new(GetRecordUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
            )),
            list_records: Arc::new(ListRecordsUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
            )),
            resolve_query: Arc::new(ResolveQueryUseCase::new(
                repos.zones.clone(),
                repos.records.clone(),
                repos.cache.clone(),
                repos.stats.clone(),
                config.cache.is_permanent(),
            )),
        }
    }
}
