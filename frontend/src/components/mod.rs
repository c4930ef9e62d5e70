pub mod calendar;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod pagination;
pub mod request_detail;
pub mod status_badge;
pub mod time_slots;
pub mod toast;
