// src/generators/mod.rs
pub mod password;

pub use password::{GeneratorError, PasswordGenerator, Sampling};
