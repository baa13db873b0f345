pub mod actors;
pub mod cli;
pub mod engine;
pub mod models;
pub mod query;
pub mod storage;
pub mod types;
