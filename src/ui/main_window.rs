use chrono::Datelike;
use fltk::{
    app::Sender,
    button::Button,
    enums::Font,
    frame::Frame,
    group::Flex,
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub title: Frame,
    pub theme_toggle: Button,
    pub url_input: Input,
    pub download_button: Button,
    pub footer: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 460, 230, "TokGrab");
    wind.set_xclass("TokGrab");

    let mut flex = Flex::new(10, 10, 440, 210, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    // Header: title on the left, theme toggle on the right
    let mut header = Flex::default();
    header.set_type(fltk::group::FlexType::Row);
    header.set_spacing(10);

    let mut title = Frame::default().with_label("\u{1f3b5} TokGrab");
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);

    let mut theme_toggle = Button::default();
    theme_toggle.set_tooltip("Toggle light/dark mode");
    header.fixed(&theme_toggle, 40);
    theme_toggle.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleDarkMode)
    });

    header.end();
    flex.fixed(&header, 36);

    let prompt = Frame::default().with_label("Paste a TikTok or Douyin video link:");
    flex.fixed(&prompt, 22);

    let url_input = Input::default();
    flex.fixed(&url_input, 30);

    let mut download_button = Button::default().with_label("\u{2b07} Download");
    download_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::DownloadRequested)
    });
    flex.fixed(&download_button, 36);

    let mut footer = Frame::default().with_label(&footer_caption());
    footer.set_label_size(11);
    flex.fixed(&footer, 20);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        title,
        theme_toggle,
        url_input,
        download_button,
        footer,
    }
}

/// Footer caption stamped once at startup; the year is frozen for the
/// session.
pub fn footer_caption() -> String {
    format!("\u{a9} {} TokGrab", chrono::Local::now().year())
}
