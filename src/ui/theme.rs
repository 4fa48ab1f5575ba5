use fltk::{
    button::Button,
    enums::Color,
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

/// Glyph shown on the theme toggle: the moon offers dark mode while the
/// window is light, the sun offers light mode while it is dark.
pub fn toggle_glyph(is_dark: bool) -> &'static str {
    if is_dark { "\u{2600}" } else { "\u{1f319}" }
}

pub fn apply_theme(
    window: &mut Window,
    title: &mut Frame,
    theme_toggle: &mut Button,
    download_button: &mut Button,
    url_input: &mut Input,
    footer: &mut Frame,
    is_dark: bool,
) {
    theme_toggle.set_label(toggle_glyph(is_dark));

    if is_dark {
        // Dark mode colors
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        title.set_label_color(Color::from_rgb(220, 220, 220));
        theme_toggle.set_color(Color::from_rgb(35, 35, 35));
        theme_toggle.set_label_color(Color::from_rgb(220, 220, 220));
        download_button.set_color(Color::from_rgb(35, 35, 35));
        download_button.set_label_color(Color::from_rgb(220, 220, 220));
        url_input.set_color(Color::from_rgb(30, 30, 30));
        url_input.set_text_color(Color::from_rgb(220, 220, 220));
        url_input.set_cursor_color(Color::from_rgb(255, 255, 255));
        url_input.set_selection_color(Color::from_rgb(70, 70, 100));
        footer.set_label_color(Color::from_rgb(150, 150, 150));
    } else {
        // Light mode colors
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        title.set_label_color(Color::Black);
        theme_toggle.set_color(Color::from_rgb(225, 225, 225));
        theme_toggle.set_label_color(Color::Black);
        download_button.set_color(Color::from_rgb(225, 225, 225));
        download_button.set_label_color(Color::Black);
        url_input.set_color(Color::White);
        url_input.set_text_color(Color::Black);
        url_input.set_cursor_color(Color::Black);
        url_input.set_selection_color(Color::from_rgb(173, 216, 230));
        footer.set_label_color(Color::from_rgb(100, 100, 100));
    }

    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
