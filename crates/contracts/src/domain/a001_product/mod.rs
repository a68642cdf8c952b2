pub mod aggregate;
pub mod code_format;
pub mod submit_gate;

pub use aggregate::{Product, ProductId};
pub use code_format::{CodeFormat, PRODUCT_CODE_FORMAT};
pub use submit_gate::SubmitGate;
