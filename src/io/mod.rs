// src/io/mod.rs

pub mod catalog;
pub mod reporting;
pub mod scenario;
