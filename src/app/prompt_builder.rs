//! Form state, required-field validation and prompt rendering.
//!
//! [`PromptBuilder`] owns the session's [`FormFields`] and the most recent
//! generated prompt. Every operation here is total: edits accept any text,
//! validation is a presence check, and rendering is a fixed template.

use super::presets;

/// The eight form attributes, used as the key for [`PromptBuilder::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Role,
    Bio,
    Skills,
    Email,
    LinkedIn,
    ColorScheme,
    DesignStyle,
}

impl FormField {
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Role,
        FormField::Bio,
        FormField::Skills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Role => "Role",
            FormField::Bio => "Bio",
            FormField::Skills => "Skills",
            FormField::Email => "Email",
            FormField::LinkedIn => "LinkedIn",
            FormField::ColorScheme => "Color Scheme",
            FormField::DesignStyle => "Design Style",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

/// Raw form values. Empty string means "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub skills: String,
    pub email: String,
    pub linkedin: String,
    pub color_scheme: String,
    pub design_style: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            bio: String::new(),
            skills: String::new(),
            email: String::new(),
            linkedin: String::new(),
            color_scheme: presets::default_color_scheme().to_string(),
            design_style: presets::default_design_style().to_string(),
        }
    }
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Role => &self.role,
            FormField::Bio => &self.bio,
            FormField::Skills => &self.skills,
            FormField::Email => &self.email,
            FormField::LinkedIn => &self.linkedin,
            FormField::ColorScheme => &self.color_scheme,
            FormField::DesignStyle => &self.design_style,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Role => &mut self.role,
            FormField::Bio => &mut self.bio,
            FormField::Skills => &mut self.skills,
            FormField::Email => &mut self.email,
            FormField::LinkedIn => &mut self.linkedin,
            FormField::ColorScheme => &mut self.color_scheme,
            FormField::DesignStyle => &mut self.design_style,
        }
    }
}

/// Whether a prompt has been generated during this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    #[default]
    NoPromptYet,
    PromptGenerated,
}

pub const NO_CONTACT_INFO: &str = "No contact info provided";

/// Build the contact line: email first, then LinkedIn, joined by `", "`.
pub fn contact_segment(fields: &FormFields) -> String {
    let mut parts = Vec::with_capacity(2);
    if !fields.email.is_empty() {
        parts.push(format!("Email: {}", fields.email));
    }
    if !fields.linkedin.is_empty() {
        parts.push(format!("LinkedIn: {}", fields.linkedin));
    }

    if parts.is_empty() {
        NO_CONTACT_INFO.to_string()
    } else {
        parts.join(", ")
    }
}

/// Render the prompt for a snapshot of the form. Pure; no validation.
pub fn render_prompt(fields: &FormFields) -> String {
    format!(
        "Create a modern personal portfolio website for {name}, a {role}.\n\
         \n\
         Bio: {bio}\n\
         \n\
         Skills: {skills}\n\
         \n\
         Contact info: {contact}\n\
         \n\
         Use {colors} colors and a {style} design style.",
        name = fields.name,
        role = fields.role,
        bio = fields.bio,
        skills = fields.skills,
        contact = contact_segment(fields),
        colors = fields.color_scheme,
        style = fields.design_style,
    )
}

/// Session-owned form state plus the last generated prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    fields: FormFields,
    generated: Option<String>,
    custom_color_mode: bool,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Set one field. Writing the color scheme also recomputes custom color
    /// mode: an empty value turns it on, anything else turns it off.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        if field == FormField::ColorScheme {
            self.custom_color_mode = value.is_empty();
        }
        trace_debug!("Field {:?} updated ({} bytes)", field, value.len());
        *self.fields.slot_mut(field) = value;
    }

    /// A click on a color preset button.
    pub fn select_color_scheme(&mut self, value: &str) {
        self.update_field(FormField::ColorScheme, value);
    }

    /// Typing into the custom color box. Custom color mode stays as it is so
    /// the box does not vanish mid-edit.
    pub fn edit_custom_color(&mut self, text: impl Into<String>) {
        self.fields.color_scheme = text.into();
    }

    pub fn is_custom_color_mode(&self) -> bool {
        self.custom_color_mode
    }

    /// Presence check only. Whitespace counts as present.
    pub fn is_valid(&self) -> bool {
        FormField::REQUIRED
            .iter()
            .all(|field| !self.fields.get(*field).is_empty())
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_required_fields(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.fields.get(*field).is_empty())
            .collect()
    }

    /// Render the current fields and store the text, replacing any earlier
    /// prompt. Runs even when the form is invalid.
    pub fn generate(&mut self) -> &str {
        let prompt = render_prompt(&self.fields);
        log_info!(
            "Generated portfolio prompt ({} chars, valid={})",
            prompt.len(),
            self.is_valid()
        );
        self.generated.insert(prompt).as_str()
    }

    pub fn generated_prompt(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    pub fn state(&self) -> PromptState {
        if self.generated.is_some() {
            PromptState::PromptGenerated
        } else {
            PromptState::NoPromptYet
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PromptBuilder {
        let mut builder = PromptBuilder::new();
        builder.update_field(FormField::Name, "Ada");
        builder.update_field(FormField::Role, "Engineer");
        builder.update_field(FormField::Bio, "Bio text");
        builder.update_field(FormField::Skills, "Rust");
        builder
    }

    #[test]
    fn test_defaults() {
        let builder = PromptBuilder::new();
        assert_eq!(builder.fields().color_scheme, "navy blue and orange");
        assert_eq!(builder.fields().design_style, "Minimalist");
        assert_eq!(builder.state(), PromptState::NoPromptYet);
        assert!(!builder.is_custom_color_mode());
        assert!(!builder.is_valid());
    }

    #[test]
    fn test_each_required_field_gates_validity() {
        for field in FormField::REQUIRED {
            let mut builder = filled();
            assert!(builder.is_valid());
            builder.update_field(field, "");
            assert!(!builder.is_valid(), "{:?} should be required", field);
            assert_eq!(builder.missing_required_fields(), vec![field]);
        }
    }

    #[test]
    fn test_optional_fields_do_not_gate_validity() {
        let builder = filled();
        assert!(builder.fields().email.is_empty());
        assert!(builder.fields().linkedin.is_empty());
        assert!(builder.is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut builder = filled();
        builder.update_field(FormField::Bio, "   ");
        assert!(builder.is_valid());
    }

    #[test]
    fn test_contact_segment_variants() {
        let mut fields = FormFields::default();
        assert_eq!(contact_segment(&fields), "No contact info provided");

        fields.linkedin = "https://linkedin.com/in/x".to_string();
        assert_eq!(contact_segment(&fields), "LinkedIn: https://linkedin.com/in/x");

        fields.email = "a@b.com".to_string();
        assert_eq!(
            contact_segment(&fields),
            "Email: a@b.com, LinkedIn: https://linkedin.com/in/x"
        );
    }

    #[test]
    fn test_color_scheme_updates_custom_mode() {
        let mut builder = PromptBuilder::new();
        builder.update_field(FormField::ColorScheme, "");
        assert!(builder.is_custom_color_mode());
        builder.update_field(FormField::ColorScheme, "blue and white");
        assert!(!builder.is_custom_color_mode());
    }

    #[test]
    fn test_custom_color_edit_keeps_mode() {
        let mut builder = PromptBuilder::new();
        builder.select_color_scheme("");
        builder.edit_custom_color("gold and black");
        assert!(builder.is_custom_color_mode());
        assert_eq!(builder.fields().color_scheme, "gold and black");

        builder.edit_custom_color("");
        assert!(builder.is_custom_color_mode());
    }

    #[test]
    fn test_other_fields_leave_custom_mode_alone() {
        let mut builder = PromptBuilder::new();
        builder.select_color_scheme("");
        builder.update_field(FormField::DesignStyle, "Bento");
        assert!(builder.is_custom_color_mode());
    }

    #[test]
    fn test_generate_replaces_previous_prompt() {
        let mut builder = filled();
        let first = builder.generate().to_string();
        builder.update_field(FormField::Name, "Grace");
        let second = builder.generate().to_string();

        assert_ne!(first, second);
        assert!(second.contains("for Grace, a Engineer."));
        assert_eq!(builder.generated_prompt(), Some(second.as_str()));
        assert_eq!(builder.state(), PromptState::PromptGenerated);
    }

    #[test]
    fn test_generate_without_guard() {
        let mut builder = PromptBuilder::new();
        let prompt = builder.generate().to_string();
        assert!(prompt.starts_with("Create a modern personal portfolio website for , a ."));
        assert!(prompt.contains("\n\nBio: \n\n"));
    }
}
