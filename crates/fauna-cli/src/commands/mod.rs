pub mod demo;
pub mod queries;
pub mod schema;
