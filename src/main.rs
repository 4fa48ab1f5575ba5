use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use tok_grab::app::state::AppState;
use tok_grab::app::{detect_system_dark_mode, AppSettings, Message};
use tok_grab::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    // An explicit stored choice wins; otherwise fall back to the system
    // signal. An adopted dark preference is persisted.
    let mut settings = AppSettings::load();
    let stored_mode = settings.theme_mode;
    let dark_mode = settings.resolve_startup_theme(detect_system_dark_mode());
    if settings.theme_mode != stored_mode {
        let _ = settings.save();
    }
    let settings = Rc::new(RefCell::new(settings));

    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, sender, settings, dark_mode);

    state.window.show();
    state.apply_current_theme();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::DownloadRequested => state.begin_download(),
                Message::DownloadFinished(outcome) => state.finish_download(outcome),
            }
        }
    }
}
