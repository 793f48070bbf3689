mod query_log_repository;
mod record_repository;
mod zone_repository;

pub use query_log_repository::SqliteQueryLogStore;
pub use record_repository::SqliteRecordStore;
pub use zone_repository::SqliteZoneStore;
