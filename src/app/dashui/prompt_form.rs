//! Input widgets for the portfolio form.
//!
//! Widgets edit a copy of the field value and push changes back through
//! [`PromptBuilder`], so the builder stays the only owner of form state.

use crate::app::presets::{ColorSchemePreset, COLOR_SCHEME_PRESETS, DESIGN_STYLE_PRESETS};
use crate::app::prompt_builder::{FormField, PromptBuilder};
use eframe::egui;
use egui::{Color32, RichText, Ui};

pub const GENERATE_BUTTON_LABEL: &str = "Generate Portfolio Prompt";

const REQUIRED_MARK_COLOR: Color32 = Color32::from_rgb(239, 68, 68);
const SWATCH_RADIUS: f32 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Generate,
}

/// Draw the whole form. Returns [`FormAction::Generate`] when the user asked
/// for a prompt.
pub fn show(ui: &mut Ui, builder: &mut PromptBuilder) -> FormAction {
    ui.columns(2, |columns| {
        text_input(&mut columns[0], builder, FormField::Name, "Your full name");
        text_input(
            &mut columns[1],
            builder,
            FormField::Role,
            "e.g., Full Stack Developer",
        );
    });
    ui.add_space(8.0);

    text_area(
        ui,
        builder,
        FormField::Bio,
        "Tell us about yourself, your experience, and what drives you...",
        3,
    );
    ui.add_space(8.0);
    text_area(
        ui,
        builder,
        FormField::Skills,
        "e.g., React, Node.js, Python, AWS, Docker...",
        2,
    );
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        text_input(
            &mut columns[0],
            builder,
            FormField::Email,
            "your.email@example.com",
        );
        text_input(
            &mut columns[1],
            builder,
            FormField::LinkedIn,
            "https://linkedin.com/in/yourprofile",
        );
    });
    ui.add_space(12.0);

    color_scheme_picker(ui, builder);
    ui.add_space(12.0);
    design_style_picker(ui, builder);
    ui.add_space(16.0);

    generate_button(ui, builder)
}

fn field_label(ui: &mut Ui, field: FormField) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        ui.label(RichText::new(field.label()).strong());
        if field.is_required() {
            ui.label(RichText::new("*").color(REQUIRED_MARK_COLOR));
        }
    });
}

fn text_input(ui: &mut Ui, builder: &mut PromptBuilder, field: FormField, hint: &str) {
    field_label(ui, field);
    let mut value = builder.fields().get(field).to_string();
    let edit = egui::TextEdit::singleline(&mut value)
        .hint_text(hint)
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        builder.update_field(field, value);
    }
}

fn text_area(ui: &mut Ui, builder: &mut PromptBuilder, field: FormField, hint: &str, rows: usize) {
    field_label(ui, field);
    let mut value = builder.fields().get(field).to_string();
    let edit = egui::TextEdit::multiline(&mut value)
        .hint_text(hint)
        .desired_rows(rows)
        .desired_width(f32::INFINITY);
    if ui.add(edit).changed() {
        builder.update_field(field, value);
    }
}

fn color_scheme_picker(ui: &mut Ui, builder: &mut PromptBuilder) {
    field_label(ui, FormField::ColorScheme);

    let current = builder.fields().color_scheme.clone();
    let mut picked: Option<&ColorSchemePreset> = None;
    ui.horizontal_wrapped(|ui| {
        for preset in COLOR_SCHEME_PRESETS.iter() {
            ui.vertical(|ui| {
                if ui
                    .selectable_label(current == preset.value, preset.name)
                    .clicked()
                {
                    picked = Some(preset);
                }
                let colors = preset.swatch_colors();
                if !colors.is_empty() {
                    ui.horizontal(|ui| {
                        for color in colors {
                            swatch(ui, color);
                        }
                    });
                }
            });
        }
    });

    if let Some(preset) = picked {
        trace_debug!("Color scheme preset selected: {}", preset.name);
        builder.select_color_scheme(preset.value);
    }

    if builder.is_custom_color_mode() {
        ui.add_space(4.0);
        let mut text = builder.fields().color_scheme.clone();
        let edit = egui::TextEdit::singleline(&mut text)
            .hint_text("e.g., purple and gold, dark blue and silver...")
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            builder.edit_custom_color(text);
        }
    }
}

fn swatch(ui: &mut Ui, color: Color32) {
    let size = egui::vec2(SWATCH_RADIUS * 2.0, SWATCH_RADIUS * 2.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), SWATCH_RADIUS, color);
    painter.circle_stroke(
        rect.center(),
        SWATCH_RADIUS,
        ui.visuals().widgets.noninteractive.bg_stroke,
    );
}

fn design_style_picker(ui: &mut Ui, builder: &mut PromptBuilder) {
    field_label(ui, FormField::DesignStyle);

    let current = builder.fields().design_style.clone();
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for style in DESIGN_STYLE_PRESETS.iter().copied() {
            if ui
                .selectable_label(current == style.label(), style.label())
                .clicked()
            {
                picked = Some(style);
            }
        }
    });

    if let Some(style) = picked {
        trace_debug!("Design style selected: {}", style);
        builder.update_field(FormField::DesignStyle, style.label());
    }
}

fn generate_button(ui: &mut Ui, builder: &PromptBuilder) -> FormAction {
    let valid = builder.is_valid();
    let button = egui::Button::new(RichText::new(GENERATE_BUTTON_LABEL).strong().size(16.0))
        .min_size(egui::vec2(ui.available_width(), 40.0));
    let clicked = ui.add_enabled(valid, button).clicked();

    if !valid {
        let missing: Vec<&str> = builder
            .missing_required_fields()
            .iter()
            .map(|field| field.label())
            .collect();
        ui.label(RichText::new(format!("Required: {}", missing.join(", "))).weak());
    }

    if clicked {
        FormAction::Generate
    } else {
        FormAction::None
    }
}
