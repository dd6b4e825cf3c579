pub mod index;
pub mod matrix;
pub mod store;
