use crate::app::clipboard::CopyIndicator;
use eframe::egui;
use egui::{Color32, RichText, Ui};

const COPIED_FILL: Color32 = Color32::from_rgb(34, 197, 94);

/// Draw the generated prompt with its copy button. Returns `true` when the
/// copy button was clicked.
pub fn show(ui: &mut Ui, prompt: &str, indicator: &CopyIndicator, scroll_into_view: bool) -> bool {
    let mut copy_clicked = false;

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Generated Prompt");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut button = egui::Button::new(indicator.button_label());
                if indicator.is_copied() {
                    button = button.fill(COPIED_FILL);
                }
                copy_clicked = ui.add(button).clicked();
            });
        });
        ui.add_space(6.0);
        ui.label(RichText::new(prompt).monospace());
    });

    if scroll_into_view {
        frame.response.scroll_to_me(Some(egui::Align::TOP));
    }

    copy_clicked
}
