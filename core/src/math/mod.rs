pub mod closed_form;
pub mod matrix;

pub use closed_form::expected_cell;
pub use matrix::{MatrixHelper, MatrixStore, SquareMatrix};
