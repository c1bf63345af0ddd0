use secfetch_rs::{RequestLogger, RequestView};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedRequest {
    pub method: String,
    pub path: String,
    pub site: String,
    pub mode: String,
}

/// Cloneable logger whose clones share one record list.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<LoggedRequest>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LoggedRequest> {
        self.entries.lock().expect("recording mutex").clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("recording mutex").len()
    }

    pub fn reset(&self) {
        self.entries.lock().expect("recording mutex").clear();
    }
}

impl RequestLogger for RecordingLogger {
    fn log_request(&self, request: &RequestView<'_>) {
        let context = request.context();
        self.entries
            .lock()
            .expect("recording mutex")
            .push(LoggedRequest {
                method: request.method().to_string(),
                path: request.uri().path().to_string(),
                site: context.site.to_string(),
                mode: context.mode.to_string(),
            });
    }
}
