pub mod plan;
pub mod push;
