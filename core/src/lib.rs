pub mod capability;
pub mod checker;
pub mod corpus;

pub mod error;
