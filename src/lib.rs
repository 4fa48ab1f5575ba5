//! TokGrab - a lightweight desktop client for a TikTok/Douyin video
//! downloader backend.
//!
//! The crate is split into an application layer (`app`) and the FLTK user
//! interface (`ui`); `main.rs` wires the two together and runs the channel
//! dispatch loop.

pub mod app;
pub mod ui;
