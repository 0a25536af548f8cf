// src/model/mod.rs

pub mod parameters;
pub mod results;
pub mod validation;
