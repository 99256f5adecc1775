//! Portfolio Prompt Generator
//!
//! A desktop form that collects a person's professional details and turns
//! them into a natural-language prompt for a website-generation tool.
//!
//! # Core Features
//!
//! - **Guided form**: name, role, bio and skills (required), email and
//!   LinkedIn (optional), color scheme and design style presets
//! - **Prompt generation**: fixed-template rendering of the current form
//! - **Clipboard copy**: asynchronous copy with a short-lived confirmation
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::dashui`]): egui/eframe window, menu and form page
//! - **Business Logic** ([`app::prompt_builder`], [`app::presets`]): form
//!   state, validation and the prompt template
//! - **Integration Layer** ([`app::clipboard`]): platform clipboard behind an
//!   async trait so tests can swap it out
//!
//! The entry point for embedding is [`PromptApp`]; the pure prompt logic is
//! usable on its own through [`app::prompt_builder::PromptBuilder`].

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::PromptApp;
