//! Core application modules for the Portfolio Prompt Generator.
//!
//! # Module Organization
//!
//! - [`prompt_builder`] - Form state, validation and prompt rendering
//! - [`presets`] - Color scheme and design style choices
//! - [`clipboard`] - Asynchronous clipboard writes and the "copied" indicator
//! - [`config`] - Optional TOML settings
//! - [`dashui`] - egui user interface
//!
//! # Architecture
//!
//! [`dashui`] owns a [`prompt_builder::PromptBuilder`] for the session and
//! forwards copy requests to [`clipboard::CopyController`], which runs them on
//! the tokio runtime started by `main`.

pub mod clipboard;
pub mod config;
pub mod dashui;
pub mod presets;
pub mod prompt_builder;

pub use dashui::PromptApp;
