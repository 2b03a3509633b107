pub mod db;
pub mod storage {
    pub mod entity;
    pub mod repository;
}
