// Module exports for models

pub mod block;
pub mod day_record;
pub mod settings;
