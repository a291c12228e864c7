pub mod api;
pub mod coerce;
pub mod config;
pub mod db;
pub mod error;
pub mod gerenciamento;
pub mod models;
pub mod server;
pub mod state;
