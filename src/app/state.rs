use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::Button,
    dialog,
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

use super::controllers::download::DownloadController;
use super::domain::messages::Message;
use super::domain::settings::{AppSettings, ThemeMode};
use super::services::downloader::{validate_url, DownloadOutcome};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub window: Window,
    pub title: Frame,
    pub theme_toggle: Button,
    pub url_input: Input,
    pub download_button: Button,
    pub footer: Frame,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub dark_mode: bool,
    pub download: DownloadController,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        dark_mode: bool,
    ) -> Self {
        let download =
            DownloadController::new(widgets.download_button.clone(), widgets.url_input.clone());

        Self {
            window: widgets.wind,
            title: widgets.title,
            theme_toggle: widgets.theme_toggle,
            url_input: widgets.url_input,
            download_button: widgets.download_button,
            footer: widgets.footer,
            sender,
            settings,
            dark_mode,
            download,
        }
    }

    /// Repaint every widget for the current mode and sync the toggle glyph.
    pub fn apply_current_theme(&mut self) {
        apply_theme(
            &mut self.window,
            &mut self.title,
            &mut self.theme_toggle,
            &mut self.download_button,
            &mut self.url_input,
            &mut self.footer,
            self.dark_mode,
        );

        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
    }

    /// Invert the mode, persist the explicit choice, repaint.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;

        {
            let mut settings = self.settings.borrow_mut();
            settings.theme_mode = ThemeMode::for_dark(self.dark_mode);
            let _ = settings.save();
        }

        self.apply_current_theme();
    }

    /// Validate the pasted URL and, if it passes, start the workflow.
    /// Validation failures alert and leave the workflow idle.
    pub fn begin_download(&mut self) {
        let video_url = match validate_url(&self.url_input.value()) {
            Ok(url) => url,
            Err(e) => {
                dialog::alert_default(&e.to_string());
                return;
            }
        };

        let server_url = self.settings.borrow().server_url.clone();
        self.download.begin(video_url, server_url, self.sender);
    }

    pub fn finish_download(&mut self, outcome: DownloadOutcome) {
        self.download.finish(outcome);
    }
}
