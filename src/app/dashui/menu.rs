use super::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    Quit,
}

/// Draw the menu bar contents and report what the user picked.
pub fn build_menu(ui: &mut egui::Ui, theme: &mut ThemeChoice) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("File", |ui| {
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        for choice in ThemeChoice::ALL {
            if ui
                .selectable_label(*theme == choice, choice.to_string())
                .clicked()
            {
                *theme = choice;
            }
        }
    });

    if menu_action == MenuAction::None && original_theme != *theme {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}
