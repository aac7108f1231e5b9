pub mod canonical;
pub mod config;
pub mod dedup;
pub mod error;
pub mod intake;
pub mod models;
pub mod pipeline;
pub mod quality;
