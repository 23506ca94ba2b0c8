pub mod config;
pub mod content;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod interactive;
pub mod practice;
pub mod progress;
pub mod session;
pub mod state;

#[cfg(test)]
pub mod testing;
