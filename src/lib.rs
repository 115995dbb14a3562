pub mod api;
pub mod app_state;
pub mod config;
pub mod fetcher;
pub mod health;
pub mod locations;
pub mod nutrition;
pub mod service;
