pub mod confirmation;
pub mod form;
pub mod summary;
