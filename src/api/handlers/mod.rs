// src/api/handlers/mod.rs
pub mod breach;
pub mod generator;
pub mod system;
