pub mod booking;
pub mod info;
