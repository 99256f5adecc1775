//! Theme management

use super::PromptApp;
use eframe::egui;

impl PromptApp {
    /// Apply the selected theme if it differs from the one last applied.
    pub(super) fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.settings.theme) {
            return;
        }

        catppuccin_egui::set_theme(ctx, self.settings.theme.flavor());

        // Squarer windows and slightly roomier widgets for a form layout
        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);

        self.applied_theme = Some(self.settings.theme);
    }
}
