//! # Pure Data Module - Data Transfer Objects Only
//!
//! This module defines configuration data structures and the TOML → DTO mapping.
//! It carries no validation and no default value calculation: whatever the file
//! says is a fact, and absent keys stay empty.

mod app_config;

pub use app_config::AppConfig;
