//! The single page of the application: header, form and result.

use super::prompt_form::{self, FormAction};
use super::result_panel;
use crate::app::clipboard::CopyController;
use crate::app::prompt_builder::PromptBuilder;
use eframe::egui;
use egui::{RichText, Ui};
use std::time::Instant;

pub const PAGE_TITLE: &str = "Portfolio Prompt Generator";
pub const PAGE_SUBTITLE: &str = "Generate personalized portfolio website prompts for Lovable.";

/// Session state for the page. Owns the form and the clipboard driver.
pub struct PromptPage {
    pub builder: PromptBuilder,
    pub copy: CopyController,
    scroll_to_result: bool,
}

impl PromptPage {
    pub fn new(copy: CopyController) -> Self {
        Self {
            builder: PromptBuilder::new(),
            copy,
            scroll_to_result: false,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let now = Instant::now();
        self.copy.poll(now);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new(PAGE_TITLE).size(28.0).strong());
                    ui.label(RichText::new(PAGE_SUBTITLE).weak());
                });
                ui.add_space(16.0);

                if prompt_form::show(ui, &mut self.builder) == FormAction::Generate {
                    self.builder.generate();
                    self.scroll_to_result = true;
                }

                if let Some(prompt) = self.builder.generated_prompt() {
                    let scroll = std::mem::take(&mut self.scroll_to_result);
                    if result_panel::show(ui, prompt, self.copy.indicator(), scroll) {
                        let text = prompt.to_string();
                        self.copy.start_copy(text);
                    }
                }
            });

        if let Some(delay) = self.copy.repaint_after(now) {
            ui.ctx().request_repaint_after(delay);
        }
    }
}
