//! Application configuration constants.
//!
//! This module centralizes all configurable values so paths and ports are
//! not hardcoded throughout the codebase.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
    content: Option<ContentConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentConfig {
    catalog_dir: Option<String>,
    local_progress_path: Option<String>,
}

fn read_config() -> Option<AppConfig> {
    let contents = std::fs::read_to_string("config.toml").ok()?;
    toml::from_str::<AppConfig>(&contents).ok()
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Some(path) = read_config()
        .and_then(|c| c.database)
        .and_then(|db| db.path)
    {
        tracing::info!("Using database from config.toml: {}", path);
        return PathBuf::from(path);
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from("data/ma-boite.db");
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Content Configuration ====================

/// Load the catalog directory with priority: config.toml > .env > default
pub fn load_catalog_dir() -> PathBuf {
    let _ = dotenvy::dotenv();

    if let Some(dir) = read_config()
        .and_then(|c| c.content)
        .and_then(|content| content.catalog_dir)
    {
        tracing::info!("Using catalog from config.toml: {}", dir);
        return PathBuf::from(dir);
    }

    if let Ok(dir) = std::env::var("CATALOG_DIR") {
        tracing::info!("Using catalog from CATALOG_DIR env: {}", dir);
        return PathBuf::from(dir);
    }

    PathBuf::from("content")
}

/// Load the path of the anonymous progress file, same priority order
pub fn load_local_progress_path() -> PathBuf {
    let _ = dotenvy::dotenv();

    if let Some(path) = read_config()
        .and_then(|c| c.content)
        .and_then(|content| content.local_progress_path)
    {
        tracing::info!("Using local progress file from config.toml: {}", path);
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("LOCAL_PROGRESS_PATH") {
        tracing::info!("Using local progress file from LOCAL_PROGRESS_PATH env: {}", path);
        return PathBuf::from(path);
    }

    PathBuf::from("data/ma-boite-progress.json")
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Session Configuration ====================

/// Session expiration time in hours
pub const SESSION_EXPIRY_HOURS: i64 = 1;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;
