pub mod event_details;
pub mod navbar;
pub mod new_event;
