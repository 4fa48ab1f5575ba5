use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// A URL the user submitted that cannot be sent to the backend.
/// The display text is shown verbatim in the alert dialog.
#[derive(Debug, Error, PartialEq)]
pub enum UrlError {
    #[error("Please paste a TikTok video URL into the field.")]
    Empty,

    #[error("Please enter a valid TikTok or Douyin URL.")]
    Unsupported,
}

#[derive(Debug, Error)]
pub enum DownloadError {
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered and refused, with a best-effort message.
    #[error("{0}")]
    Backend(String),
}

/// Result of one download workflow run, sent back to the UI thread.
#[derive(Debug, Clone)]
pub enum DownloadOutcome {
    Ready { link: String },
    Failed { message: String },
}

/// Trim and sanity-check a submitted URL. This is a superficial check only;
/// the backend validates the URL for real.
pub fn validate_url(raw: &str) -> Result<String, UrlError> {
    let url = raw.trim();

    if url.is_empty() {
        return Err(UrlError::Empty);
    }

    if !url.contains("tiktok.com") && !url.contains("douyin.com") {
        return Err(UrlError::Unsupported);
    }

    Ok(url.to_string())
}

#[derive(Debug, Serialize)]
struct ResolveRequest<'a> {
    #[serde(rename = "tiktokUrl")]
    tiktok_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResolveReply {
    #[serde(default)]
    success: bool,

    #[serde(rename = "downloadLink")]
    download_link: Option<String>,

    message: Option<String>,
}

/// Blocking client for the video-resolver backend.
pub struct DownloadClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl DownloadClient {
    pub fn new(base_url: &str) -> Result<Self, DownloadError> {
        // The backend fetches the whole video before answering; the timeout
        // has to cover the full transfer, not just a status check.
        let http = reqwest::blocking::Client::builder()
            .user_agent("TokGrab")
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| DownloadError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Submit a video URL and resolve it into an absolute download link.
    pub fn resolve(&self, video_url: &str) -> Result<String, DownloadError> {
        let response = self
            .http
            .post(format!("{}/download-tiktok", self.base_url))
            .json(&ResolveRequest { tiktok_url: video_url })
            .send()
            .map_err(|e| {
                DownloadError::Transport(format!("Failed to connect to the download server: {}", e))
            })?;

        if !response.status().is_success() {
            // Attempt to parse a server-sent error message
            let message = response
                .json::<ResolveReply>()
                .map(|reply| reply.message.unwrap_or_else(|| "Failed to process video.".to_string()))
                .unwrap_or_else(|_| "Server error occurred.".to_string());
            return Err(DownloadError::Backend(message));
        }

        let reply: ResolveReply = response.json().map_err(|e| {
            DownloadError::Transport(format!("Failed to parse the server response: {}", e))
        })?;

        match reply {
            ResolveReply {
                success: true,
                download_link: Some(link),
                ..
            } => Ok(self.absolute_link(&link)),
            ResolveReply { message, .. } => Err(DownloadError::Backend(
                message.unwrap_or_else(|| "Could not get download link.".to_string()),
            )),
        }
    }

    /// The backend may return a link relative to its own root (it serves the
    /// fetched file itself); resolve such links against the base URL the way
    /// a browser resolves them against the page origin.
    fn absolute_link(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            link.to_string()
        } else {
            format!("{}/{}", self.base_url, link.trim_start_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn test_validate_url_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlError::Empty));
        assert_eq!(validate_url("   \t  "), Err(UrlError::Empty));
    }

    #[test]
    fn test_validate_url_rejects_foreign_hosts() {
        assert_eq!(
            validate_url("https://example.com/watch?v=123"),
            Err(UrlError::Unsupported)
        );
        assert_eq!(validate_url("not a url"), Err(UrlError::Unsupported));
    }

    #[test]
    fn test_validate_url_accepts_tiktok_and_douyin() {
        assert_eq!(
            validate_url("https://tiktok.com/@x/video/1").unwrap(),
            "https://tiktok.com/@x/video/1"
        );
        assert_eq!(
            validate_url("https://www.douyin.com/video/99").unwrap(),
            "https://www.douyin.com/video/99"
        );
    }

    #[test]
    fn test_validate_url_trims_whitespace() {
        assert_eq!(
            validate_url("  https://vm.tiktok.com/xyz \n").unwrap(),
            "https://vm.tiktok.com/xyz"
        );
    }

    #[test]
    fn test_validation_error_text() {
        assert_eq!(
            UrlError::Empty.to_string(),
            "Please paste a TikTok video URL into the field."
        );
        assert_eq!(
            UrlError::Unsupported.to_string(),
            "Please enter a valid TikTok or Douyin URL."
        );
    }

    #[test]
    fn test_reply_parses_optional_fields() {
        let reply: ResolveReply =
            serde_json::from_str(r#"{"success":true,"downloadLink":"/download/a.mp4"}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.download_link.as_deref(), Some("/download/a.mp4"));
        assert!(reply.message.is_none());

        let reply: ResolveReply = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert!(!reply.success);
        assert!(reply.download_link.is_none());
        assert_eq!(reply.message.as_deref(), Some("nope"));
    }

    #[test]
    fn test_absolute_link_passthrough_and_join() {
        let client = DownloadClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(
            client.absolute_link("https://cdn.example/file.mp4"),
            "https://cdn.example/file.mp4"
        );
        assert_eq!(
            client.absolute_link("/download/file.mp4"),
            "http://127.0.0.1:5000/download/file.mp4"
        );
        assert_eq!(
            client.absolute_link("download/file.mp4"),
            "http://127.0.0.1:5000/download/file.mp4"
        );
    }

    /// Serve exactly one HTTP exchange on a loopback socket, capturing the
    /// raw request for assertions.
    fn spawn_stub(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut tmp = [0u8; 1024];

            let header_end = loop {
                let n = stream.read(&mut tmp).unwrap();
                if n == 0 {
                    return;
                }
                buf.extend_from_slice(&tmp[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos;
                }
            };

            let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.trim().eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);

            while buf.len() < header_end + 4 + content_length {
                let n = stream.read(&mut tmp).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&tmp[..n]);
            }

            let _ = tx.send(String::from_utf8_lossy(&buf).to_string());

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            let _ = stream.flush();
        });

        (format!("http://{}", addr), rx)
    }

    #[test]
    fn test_resolve_posts_exact_body_to_endpoint() {
        let (base, rx) = spawn_stub(
            "HTTP/1.1 200 OK",
            r#"{"success":true,"downloadLink":"https://cdn.example/file.mp4"}"#,
        );

        let client = DownloadClient::new(&base).unwrap();
        let link = client.resolve("https://tiktok.com/@x/video/1").unwrap();
        assert_eq!(link, "https://cdn.example/file.mp4");

        let request = rx.recv().unwrap();
        assert!(request.starts_with("POST /download-tiktok HTTP/1.1\r\n"));
        assert!(request
            .to_lowercase()
            .contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"tiktokUrl":"https://tiktok.com/@x/video/1"}"#));
    }

    #[test]
    fn test_resolve_makes_relative_link_absolute() {
        let (base, _rx) = spawn_stub(
            "HTTP/1.1 200 OK",
            r#"{"success":true,"downloadLink":"/download/abc.mp4"}"#,
        );

        let client = DownloadClient::new(&base).unwrap();
        let link = client.resolve("https://tiktok.com/@x/video/1").unwrap();
        assert_eq!(link, format!("{}/download/abc.mp4", base));
    }

    #[test]
    fn test_resolve_surfaces_backend_message_on_error_status() {
        let (base, _rx) = spawn_stub(
            "HTTP/1.1 500 INTERNAL SERVER ERROR",
            r#"{"success":false,"message":"video not found"}"#,
        );

        let client = DownloadClient::new(&base).unwrap();
        match client.resolve("https://tiktok.com/@x/video/1") {
            Err(DownloadError::Backend(message)) => assert_eq!(message, "video not found"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_generic_message_when_error_body_is_not_json() {
        let (base, _rx) = spawn_stub("HTTP/1.1 502 BAD GATEWAY", "upstream exploded");

        let client = DownloadClient::new(&base).unwrap();
        match client.resolve("https://tiktok.com/@x/video/1") {
            Err(DownloadError::Backend(message)) => assert_eq!(message, "Server error occurred."),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_generic_message_when_error_body_lacks_message() {
        let (base, _rx) = spawn_stub("HTTP/1.1 500 INTERNAL SERVER ERROR", r#"{"success":false}"#);

        let client = DownloadClient::new(&base).unwrap();
        match client.resolve("https://tiktok.com/@x/video/1") {
            Err(DownloadError::Backend(message)) => assert_eq!(message, "Failed to process video."),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rejects_success_without_link() {
        let (base, _rx) = spawn_stub("HTTP/1.1 200 OK", r#"{"success":true}"#);

        let client = DownloadClient::new(&base).unwrap();
        match client.resolve("https://tiktok.com/@x/video/1") {
            Err(DownloadError::Backend(message)) => {
                assert_eq!(message, "Could not get download link.")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_uses_message_when_success_is_false() {
        let (base, _rx) = spawn_stub(
            "HTTP/1.1 200 OK",
            r#"{"success":false,"message":"processing failed"}"#,
        );

        let client = DownloadClient::new(&base).unwrap();
        match client.resolve("https://tiktok.com/@x/video/1") {
            Err(DownloadError::Backend(message)) => assert_eq!(message, "processing failed"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
