// Domain layer - Core business logic

pub mod errors;
pub mod identifier;
pub mod model;
pub mod rules;
