pub mod repository;
pub mod song;
