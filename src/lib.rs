// src/lib.rs

//! Help-center article search library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod services;
pub mod storage;
pub mod utils;
