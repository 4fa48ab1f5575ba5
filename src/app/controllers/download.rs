use std::thread;

use fltk::{app::Sender, button::Button, dialog, input::Input, prelude::*};

use crate::app::domain::messages::Message;
use crate::app::services::downloader::{DownloadClient, DownloadOutcome};

/// Drives one download workflow at a time: deactivates the widgets while a
/// request is in flight and restores them when the result comes back,
/// whatever the outcome. Widgets are cheap FLTK handles shared with the
/// main window.
pub struct DownloadController {
    button: Button,
    input: Input,
    in_flight: bool,
    saved_label: String,
}

impl DownloadController {
    pub fn new(button: Button, input: Input) -> Self {
        Self {
            button,
            input,
            in_flight: false,
            saved_label: String::new(),
        }
    }

    /// Hand a validated URL to a worker thread. The worker reports back
    /// through the channel; it never touches the widgets itself.
    pub fn begin(&mut self, video_url: String, server_url: String, sender: Sender<Message>) {
        if self.in_flight {
            return;
        }
        self.in_flight = true;

        // Disable the widgets and show a processing state
        self.saved_label = self.button.label();
        self.button.set_label("\u{23f3} Processing...");
        self.button.deactivate();
        self.input.deactivate();

        thread::spawn(move || {
            let outcome = match DownloadClient::new(&server_url)
                .and_then(|client| client.resolve(&video_url))
            {
                Ok(link) => DownloadOutcome::Ready { link },
                Err(err) => DownloadOutcome::Failed {
                    message: err.to_string(),
                },
            };
            sender.send(Message::DownloadFinished(outcome));
        });
    }

    /// Back on the UI thread. Restore the widgets first, unconditionally,
    /// then surface the outcome.
    pub fn finish(&mut self, outcome: DownloadOutcome) {
        self.button.set_label(&self.saved_label);
        self.button.activate();
        self.input.activate();
        self.in_flight = false;

        match outcome {
            DownloadOutcome::Ready { link } => {
                if let Err(e) = open::that(&link) {
                    dialog::alert_default(&format!("Failed to open the download link: {}", e));
                    return;
                }
                self.input.set_value("");
            }
            DownloadOutcome::Failed { message } => {
                dialog::alert_default(&format!("Error: {}", message));
            }
        }
    }
}
