pub mod labels;
pub mod model;
pub mod workflow;
