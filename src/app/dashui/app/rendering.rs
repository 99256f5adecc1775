//! UI rendering for top menu, central panel and build info

use super::PromptApp;
use crate::app::dashui::menu;
use eframe::egui;

const PAGE_MAX_WIDTH: f32 = 720.0;

impl PromptApp {
    /// Render the top menu bar
    pub(super) fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                match menu::build_menu(ui, &mut self.settings.theme) {
                    menu::MenuAction::ThemeChanged => {
                        tracing::info!("Theme changed to {}", self.settings.theme);
                    }
                    menu::MenuAction::Quit => {
                        tracing::info!("Quit requested from menu");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    /// Render the form page, centered and width-limited
    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let width = ui.available_width().min(PAGE_MAX_WIDTH);
            let margin = ((ui.available_width() - width) / 2.0).max(0.0);
            ui.horizontal_top(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    self.page.ui(ui);
                });
            });
        });
    }

    /// Render build information in debug builds
    pub(super) fn render_debug_panel(&mut self, ctx: &egui::Context) {
        if !cfg!(debug_assertions) {
            return;
        }

        egui::TopBottomPanel::bottom("bottom_panel")
            .show_separator_line(false)
            .resizable(false)
            .min_height(0.0)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::RIGHT), |ui| {
                    let git_branch = env!("GIT_BRANCH");
                    let git_commit = env!("GIT_COMMIT");
                    ui.label(
                        egui::RichText::new(format!(
                            "Debug Build - {}@{}",
                            git_branch, git_commit
                        ))
                        .small()
                        .color(egui::Color32::from_rgb(255, 165, 0)), // Orange color
                    );
                });
            });
    }
}
