//! Value types carried by a single request/response cycle.

mod heximal;
mod matrix;
mod operation;

pub use heximal::HexNumeral;
pub use matrix::Matrix;
pub use operation::OperationType;
