pub mod fold;
pub mod search;
