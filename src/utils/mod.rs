pub mod date;
pub mod lane;
pub mod time;
