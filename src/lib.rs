pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod scoring;
pub mod services;
pub mod sources;
