pub mod booking;
pub mod session;
pub mod toast;
