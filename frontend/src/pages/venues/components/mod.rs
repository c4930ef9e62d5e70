pub mod card;
pub mod filter;
