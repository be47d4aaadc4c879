pub mod db;
pub mod file;
pub mod memory;
pub mod key_value {
    pub mod entity;
    pub mod repository;
}
