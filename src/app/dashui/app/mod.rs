//! Modular implementation of PromptApp
//!
//! - initialization: App creation from the eframe context and config
//! - theme: Theme management
//! - rendering: Top menu bar, central panel and build info panel

use super::prompt_page::PromptPage;
use super::ThemeChoice;
use eframe::egui;

mod initialization;
mod rendering;
mod theme;

/// Settings restored from eframe storage between runs. Form contents are
/// never stored.
#[derive(Debug, serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct UiSettings {
    pub theme: ThemeChoice,
}

pub struct PromptApp {
    pub settings: UiSettings,
    pub page: PromptPage,
    applied_theme: Option<ThemeChoice>,
}

impl eframe::App for PromptApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);
        self.render_top_menu_bar(ctx);
        self.render_debug_panel(ctx);
        self.render_central_panel(ctx);
    }
}
