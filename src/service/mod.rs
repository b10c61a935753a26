pub mod new_event_form;
pub mod notification;
pub mod session;
pub mod time_slider;
