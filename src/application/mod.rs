/// Authorization-code token exchange
pub mod auth;
/// TimeSolv API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
