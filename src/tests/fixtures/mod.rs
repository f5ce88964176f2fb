pub mod commands;
pub mod rows;
pub mod stores;
