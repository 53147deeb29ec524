use std::sync::mpsc;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use tracing::{debug, warn};

use crate::contracts::ClipboardCompletion;
use crate::contracts::ClipboardError;
use crate::contracts::ClipboardWrite;

/// Writes are fire-and-forget: `write` returns immediately and the outcome arrives on `done`
/// at some later point, possibly never if the receiver is gone.
pub trait ClipboardWriter {
    fn write(&self, request: ClipboardWrite, done: mpsc::Sender<ClipboardCompletion>);
}

/// Backed by the OS clipboard through `arboard`, one worker thread per write.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&self, request: ClipboardWrite, done: mpsc::Sender<ClipboardCompletion>) {
        thread::spawn(move || {
            let result = write_system(&request.text);
            match &result {
                Ok(()) => debug!(request_id = request.request_id, "clipboard updated"),
                Err(err) => warn!(request_id = request.request_id, %err, "clipboard write failed"),
            }
            let _ = done.send(ClipboardCompletion {
                request_id: request.request_id,
                result,
            });
        });
    }
}

fn write_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|err| ClipboardError::Rejected(err.to_string()))
}

/// Completes every write synchronously and remembers what was written.
#[derive(Debug, Default, Clone)]
pub struct RecordingClipboard {
    written: Arc<Mutex<Vec<Arc<str>>>>,
}

impl RecordingClipboard {
    pub fn written(&self) -> Vec<Arc<str>> {
        match self.written.lock() {
            Ok(written) => written.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write(&self, request: ClipboardWrite, done: mpsc::Sender<ClipboardCompletion>) {
        match self.written.lock() {
            Ok(mut written) => written.push(Arc::clone(&request.text)),
            Err(poisoned) => poisoned.into_inner().push(Arc::clone(&request.text)),
        }
        let _ = done.send(ClipboardCompletion {
            request_id: request.request_id,
            result: Ok(()),
        });
    }
}

/// For hosts without clipboard access; every write fails.
#[derive(Debug, Clone)]
pub struct UnavailableClipboard {
    pub reason: Arc<str>,
}

impl ClipboardWriter for UnavailableClipboard {
    fn write(&self, request: ClipboardWrite, done: mpsc::Sender<ClipboardCompletion>) {
        let _ = done.send(ClipboardCompletion {
            request_id: request.request_id,
            result: Err(ClipboardError::Unavailable(self.reason.to_string())),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(request_id: u64, text: &str) -> ClipboardWrite {
        ClipboardWrite {
            request_id,
            text: Arc::from(text),
        }
    }

    #[test]
    fn recording_clipboard_completes_and_records() {
        let clipboard = RecordingClipboard::default();
        let (tx, rx) = mpsc::channel();

        clipboard.write(request(4, "https://air-hr.example/"), tx);

        let completion = rx.try_recv().expect("completion");
        assert_eq!(completion.request_id, 4);
        assert_eq!(completion.result, Ok(()));
        assert_eq!(clipboard.written(), vec![Arc::<str>::from("https://air-hr.example/")]);
    }

    #[test]
    fn unavailable_clipboard_reports_failure() {
        let clipboard = UnavailableClipboard {
            reason: "headless session".into(),
        };
        let (tx, rx) = mpsc::channel();

        clipboard.write(request(1, "x"), tx);

        let completion = rx.try_recv().expect("completion");
        assert_eq!(
            completion.result,
            Err(ClipboardError::Unavailable("headless session".to_string()))
        );
        assert_eq!(
            completion.result.unwrap_err().to_string(),
            "clipboard unavailable: headless session"
        );
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        let clipboard = RecordingClipboard::default();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        clipboard.write(request(1, "x"), tx);
        assert_eq!(clipboard.written().len(), 1);
    }
}
