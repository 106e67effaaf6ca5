//! Engagement ranking for bloggers: comments → posts → accounts → top N.

pub mod chunked;
pub mod config;
pub mod error;
pub mod ingest;
pub mod join;
pub mod model;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod resource;
pub mod tally;
pub mod types;
