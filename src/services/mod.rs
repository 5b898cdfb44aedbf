pub mod auth;
pub mod client_service;
pub mod ordem_service;
pub mod token;
