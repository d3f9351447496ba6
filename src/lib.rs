// Shift Planner Library
// Time-block scheduling core: persisted day records, lane geometry, planner settings

pub mod models;
pub mod services;
pub mod utils;
