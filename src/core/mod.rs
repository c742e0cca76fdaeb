//! Core domain logic

pub mod models;
pub mod resources;
