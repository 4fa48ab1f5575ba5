use crate::app::services::downloader::DownloadOutcome;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them. Worker threads report back the same way.
#[derive(Debug, Clone)]
pub enum Message {
    // Theme
    ToggleDarkMode,

    // Download workflow
    DownloadRequested,
    DownloadFinished(DownloadOutcome),
}
