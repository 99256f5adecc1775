//! App creation

use super::{PromptApp, UiSettings};
use crate::app::clipboard::{ClipboardBridge, CopyController};
use crate::app::config::AppConfig;
use crate::app::dashui::prompt_page::PromptPage;
use tokio::runtime::Handle;
use tracing::info;

impl PromptApp {
    /// Create the app from the eframe creation context.
    ///
    /// A theme saved in eframe storage wins over the configured one.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig, runtime: Handle) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<UiSettings>(storage, eframe::APP_KEY))
            .unwrap_or(UiSettings {
                theme: config.theme,
            });

        let copy = CopyController::new(ClipboardBridge::system(), runtime, config.copy_feedback());
        let mut app = Self::with_page(settings, PromptPage::new(copy));
        app.sync_theme(&cc.egui_ctx);

        info!(
            "Prompt app initialized (theme={}, copy feedback={:?})",
            app.settings.theme,
            config.copy_feedback()
        );
        app
    }

    /// Build the app around an existing page, without touching eframe.
    pub fn with_page(settings: UiSettings, page: PromptPage) -> Self {
        Self {
            settings,
            page,
            applied_theme: None,
        }
    }
}
