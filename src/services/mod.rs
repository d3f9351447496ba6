// Service module exports

pub mod block;
pub mod config;
pub mod settings;
pub mod storage;
