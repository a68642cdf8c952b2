pub mod confirm;
pub mod dom;
