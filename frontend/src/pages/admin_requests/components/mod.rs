pub mod filter;
pub mod status_form;
