pub mod controller;
pub mod global_context;
