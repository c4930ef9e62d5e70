pub mod admin;
pub mod admin_requests;
pub mod admin_users;
pub mod admin_venues;
pub mod home;
pub mod login;
pub mod my_requests;
pub mod register;
pub mod reservation;
pub mod venue_detail;
pub mod venues;
