//! Shared configuration and error types for the calconv workspace.

pub mod config;
pub mod error;
