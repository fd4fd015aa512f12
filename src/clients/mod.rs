//! Client modules for external API interactions

pub mod worker_client;

pub use worker_client::WorkerClient;
