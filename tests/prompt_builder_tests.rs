//! Prompt Builder behavior tests
//!
//! Covers the form-to-prompt flow end to end: field edits, the required-field
//! gate, the contact line and the exact rendered template.

use portfolio_prompt::app::presets::{color_scheme_by_name, COLOR_SCHEME_PRESETS};
use portfolio_prompt::app::prompt_builder::{
    contact_segment, render_prompt, FormField, FormFields, PromptBuilder, PromptState,
};
use pretty_assertions::assert_eq;

fn ada() -> PromptBuilder {
    let mut builder = PromptBuilder::new();
    builder.update_field(FormField::Name, "Ada Lovelace");
    builder.update_field(FormField::Role, "Software Engineer");
    builder.update_field(FormField::Bio, "Builds things.");
    builder.update_field(FormField::Skills, "TypeScript, Go");
    builder
}

#[test]
fn test_end_to_end_prompt_matches_template() {
    let mut builder = ada();
    assert!(builder.is_valid());

    let prompt = builder.generate().to_string();

    assert_eq!(
        prompt,
        "Create a modern personal portfolio website for Ada Lovelace, a Software Engineer.\n\nBio: Builds things.\n\nSkills: TypeScript, Go\n\nContact info: No contact info provided\n\nUse navy blue and orange colors and a Minimalist design style."
    );
}

#[test]
fn test_full_prompt_snapshot() {
    let mut builder = ada();
    builder.update_field(FormField::Email, "ada@example.com");
    builder.update_field(FormField::LinkedIn, "https://linkedin.com/in/ada");
    builder.select_color_scheme("purple and pink");
    builder.update_field(FormField::DesignStyle, "Bento");

    insta::assert_snapshot!(builder.generate(), @r"
    Create a modern personal portfolio website for Ada Lovelace, a Software Engineer.

    Bio: Builds things.

    Skills: TypeScript, Go

    Contact info: Email: ada@example.com, LinkedIn: https://linkedin.com/in/ada

    Use purple and pink colors and a Bento design style.
    ");
}

#[test]
fn test_generate_is_deterministic() {
    let mut first = ada();
    let mut second = ada();
    assert_eq!(first.generate(), second.generate());
    assert_eq!(render_prompt(first.fields()), render_prompt(second.fields()));
}

#[test]
fn test_contact_segment_email_only() {
    let fields = FormFields {
        email: "a@b.com".to_string(),
        ..FormFields::default()
    };
    assert_eq!(contact_segment(&fields), "Email: a@b.com");
}

#[test]
fn test_contact_segment_email_before_linkedin() {
    let fields = FormFields {
        email: "a@b.com".to_string(),
        linkedin: "https://linkedin.com/in/x".to_string(),
        ..FormFields::default()
    };
    assert_eq!(
        contact_segment(&fields),
        "Email: a@b.com, LinkedIn: https://linkedin.com/in/x"
    );
}

#[test]
fn test_contact_segment_empty() {
    assert_eq!(
        contact_segment(&FormFields::default()),
        "No contact info provided"
    );
}

#[test]
fn test_custom_color_flow() {
    let mut builder = ada();
    let custom = color_scheme_by_name("Custom").unwrap();

    builder.select_color_scheme(custom.value);
    assert!(builder.is_custom_color_mode());
    assert_eq!(builder.fields().color_scheme, "");

    builder.edit_custom_color("gold and black");
    assert_eq!(builder.fields().color_scheme, "gold and black");
    assert!(builder
        .generate()
        .ends_with("Use gold and black colors and a Minimalist design style."));
}

#[test]
fn test_preset_after_custom_leaves_custom_mode() {
    let mut builder = PromptBuilder::new();
    builder.select_color_scheme("");
    assert!(builder.is_custom_color_mode());

    builder.select_color_scheme(COLOR_SCHEME_PRESETS[1].value);
    assert!(!builder.is_custom_color_mode());
    assert_eq!(builder.fields().color_scheme, "blue and white");
}

#[test]
fn test_update_then_generate_uses_new_value() {
    let mut builder = ada();
    builder.generate();

    for (field, value) in [
        (FormField::Name, "Grace Hopper"),
        (FormField::Role, "Rear Admiral"),
        (FormField::Bio, "Wrote compilers."),
        (FormField::Skills, "COBOL"),
        (FormField::Email, "grace@navy.mil"),
        (FormField::LinkedIn, "https://linkedin.com/in/grace"),
        (FormField::ColorScheme, "green and gray"),
        (FormField::DesignStyle, "Classic"),
    ] {
        builder.update_field(field, value);
        let prompt = builder.generate().to_string();
        assert!(
            prompt.contains(value),
            "{:?} = {:?} missing from prompt:\n{}",
            field,
            value,
            prompt
        );
    }
}

#[test]
fn test_state_machine() {
    let mut builder = PromptBuilder::new();
    assert_eq!(builder.state(), PromptState::NoPromptYet);
    assert_eq!(builder.generated_prompt(), None);

    builder.generate();
    assert_eq!(builder.state(), PromptState::PromptGenerated);

    builder.generate();
    assert_eq!(builder.state(), PromptState::PromptGenerated);
}

#[test]
fn test_missing_required_fields_in_form_order() {
    let mut builder = PromptBuilder::new();
    builder.update_field(FormField::Role, "Engineer");
    assert_eq!(
        builder.missing_required_fields(),
        vec![FormField::Name, FormField::Bio, FormField::Skills]
    );
}
