pub mod app;
pub mod config;
pub mod dishes;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod menus;
pub mod openapi;
pub mod state;
pub mod submenus;
pub mod telemetry;
pub mod validation;

/// Embedded SQL migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
