//! egui front end: the application shell, the menu and the prompt page.

pub mod app;
pub mod menu;
pub mod prompt_form;
pub mod prompt_page;
pub mod result_panel;

pub use app::{PromptApp, UiSettings};
pub use prompt_page::PromptPage;

#[derive(Debug, serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 4] = [
        ThemeChoice::Latte,
        ThemeChoice::Frappe,
        ThemeChoice::Macchiato,
        ThemeChoice::Mocha,
    ];

    pub fn flavor(&self) -> catppuccin_egui::Theme {
        match self {
            ThemeChoice::Latte => catppuccin_egui::LATTE,
            ThemeChoice::Frappe => catppuccin_egui::FRAPPE,
            ThemeChoice::Macchiato => catppuccin_egui::MACCHIATO,
            ThemeChoice::Mocha => catppuccin_egui::MOCHA,
        }
    }
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}
