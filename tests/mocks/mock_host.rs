use contact_card::host::{FileSaver, UriDispatcher};
use std::sync::{Arc, Mutex};

/// One document handed to the saver.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub filename: String,
    pub mime_type: String,
    pub contents: Vec<u8>,
}

/// Mock save-file capability that records every handed document.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSaver {
    saved: Arc<Mutex<Vec<SavedFile>>>,
}

#[allow(dead_code)]
impl RecordingSaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All documents handed over so far, in order.
    pub fn saved(&self) -> Vec<SavedFile> {
        self.saved.lock().unwrap().clone()
    }
}

impl FileSaver for RecordingSaver {
    fn save_file(&self, filename: &str, mime_type: &str, contents: &[u8]) {
        self.saved.lock().unwrap().push(SavedFile {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            contents: contents.to_vec(),
        });
    }
}

/// Mock URI-dispatch capability that records every handed URI.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    uris: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All dispatched URIs, in order.
    pub fn uris(&self) -> Vec<String> {
        self.uris.lock().unwrap().clone()
    }
}

impl UriDispatcher for RecordingDispatcher {
    fn open_uri(&self, uri: &str) {
        self.uris.lock().unwrap().push(uri.to_string());
    }
}
