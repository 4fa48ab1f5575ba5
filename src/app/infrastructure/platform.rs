/// Best-effort detection of the operating system's dark-mode preference.
/// Returns false when the platform gives no usable signal.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    return windows_prefers_dark();

    #[cfg(target_os = "linux")]
    return linux_prefers_dark();

    #[cfg(target_os = "macos")]
    return macos_prefers_dark();

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    return false;
}

/// Windows: AppsUseLightTheme is 0 when apps should render dark.
#[cfg(target_os = "windows")]
fn windows_prefers_dark() -> bool {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .and_then(|key| key.get_value::<u32, _>("AppsUseLightTheme"))
        .map(|value| value == 0)
        .unwrap_or(false)
}

/// Linux: ask gsettings, first for the freedesktop color-scheme key, then
/// for a "dark" GTK theme name (older desktops).
#[cfg(target_os = "linux")]
fn linux_prefers_dark() -> bool {
    use std::process::Command;

    let gsettings = |schema: &str, key: &str| -> Option<String> {
        let output = Command::new("gsettings")
            .args(["get", schema, key])
            .output()
            .ok()?;
        Some(String::from_utf8_lossy(&output.stdout).to_lowercase())
    };

    if let Some(scheme) = gsettings("org.gnome.desktop.interface", "color-scheme") {
        if scheme.contains("prefer-dark") {
            return true;
        }
    }

    if let Some(theme) = gsettings("org.gnome.desktop.interface", "gtk-theme") {
        if theme.contains("dark") {
            return true;
        }
    }

    false
}

/// macOS: AppleInterfaceStyle only exists (and reads "Dark") in dark mode.
#[cfg(target_os = "macos")]
fn macos_prefers_dark() -> bool {
    use std::process::Command;

    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("dark")
        })
        .unwrap_or(false)
}
