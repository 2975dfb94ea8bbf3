// Library entry so integration tests can reach the controller without a gateway.
pub mod commands;
pub mod config;
pub mod handler;
pub mod interactions;

pub use config::BotConfig;
pub use handler::Handler;
