pub mod date_range;
pub mod event;
pub mod user;
