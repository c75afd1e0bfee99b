pub mod answers;
pub mod catalog;
pub mod constants;
pub mod controller;
pub mod env_config;
pub mod scoring;
pub mod server;
pub mod share;
