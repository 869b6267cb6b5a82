pub mod db;
pub mod supervisor;
pub mod product {
    pub mod entity;
    pub mod repository;
}
