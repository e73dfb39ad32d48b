// src/services/mod.rs
pub mod gemini;
pub mod prompt;
