//! UI interaction tests for the prompt page using egui_kittest
//!
//! Text entry is done through the page state directly; buttons and preset
//! selectors are driven through the accessibility tree like a user would.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use portfolio_prompt::app::clipboard::{ClipboardBridge, CopyController};
use portfolio_prompt::app::dashui::prompt_form::GENERATE_BUTTON_LABEL;
use portfolio_prompt::app::dashui::PromptPage;
use portfolio_prompt::app::prompt_builder::FormField;
use std::time::Duration;

fn page(runtime: &tokio::runtime::Runtime) -> PromptPage {
    let copy = CopyController::new(
        ClipboardBridge::system(),
        runtime.handle().clone(),
        Duration::from_secs(2),
    );
    PromptPage::new(copy)
}

fn harness(runtime: &tokio::runtime::Runtime) -> Harness<'static, PromptPage> {
    Harness::builder()
        .with_size(egui::vec2(800.0, 1600.0))
        .build_ui_state(|ui, state: &mut PromptPage| state.ui(ui), page(runtime))
}

fn fill_required(page: &mut PromptPage) {
    page.builder.update_field(FormField::Name, "Ada Lovelace");
    page.builder.update_field(FormField::Role, "Software Engineer");
    page.builder.update_field(FormField::Bio, "Builds things.");
    page.builder.update_field(FormField::Skills, "TypeScript, Go");
}

#[test]
fn test_generate_disabled_until_valid() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut harness = harness(&runtime);
    harness.run();

    harness.get_by_label(GENERATE_BUTTON_LABEL).click();
    harness.run();
    assert!(harness.state().builder.generated_prompt().is_none());
    assert!(harness.query_by_label("Generated Prompt").is_none());

    fill_required(harness.state_mut());
    harness.run();

    harness.get_by_label(GENERATE_BUTTON_LABEL).click();
    harness.run();

    assert_eq!(
        harness.state().builder.generated_prompt(),
        Some(
            "Create a modern personal portfolio website for Ada Lovelace, a Software Engineer.\n\nBio: Builds things.\n\nSkills: TypeScript, Go\n\nContact info: No contact info provided\n\nUse navy blue and orange colors and a Minimalist design style."
        )
    );
    assert!(harness.query_by_label("Generated Prompt").is_some());
    assert!(harness.query_by_label("Copy").is_some());
}

#[test]
fn test_custom_color_preset_enables_custom_mode() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut harness = harness(&runtime);
    harness.run();

    harness.get_by_label("Custom").click();
    harness.run();

    assert!(harness.state().builder.is_custom_color_mode());
    assert_eq!(harness.state().builder.fields().color_scheme, "");

    harness.get_by_label("Green & Gray").click();
    harness.run();

    assert!(!harness.state().builder.is_custom_color_mode());
    assert_eq!(harness.state().builder.fields().color_scheme, "green and gray");
}

#[test]
fn test_design_style_selection() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut harness = harness(&runtime);
    harness.run();

    harness.get_by_label("Bento").click();
    harness.run();

    assert_eq!(harness.state().builder.fields().design_style, "Bento");
}
