pub mod db;
pub mod order {
    pub mod entity;
    pub mod repository;
}
