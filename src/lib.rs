pub mod app;
pub mod cli;
pub mod configuration;
pub mod rest;
pub mod service;
pub mod storage;
pub mod tracing;
pub mod types;
