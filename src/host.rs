//! Host-shell capabilities: file export and URI dispatch.
//!
//! Both are fire-and-forget by contract. The core hands the host a
//! document or a URI and never observes whether the save dialog appeared
//! or a messaging app opened; a host without the capability is a no-op,
//! not an error.

/// Save-file capability (save-as / download interaction).
pub trait FileSaver: Send + Sync {
    /// Hand the host a document to save under the suggested filename.
    fn save_file(&self, filename: &str, mime_type: &str, contents: &[u8]);
}

/// URI-dispatch capability (navigate the host context to a URI).
pub trait UriDispatcher: Send + Sync {
    /// Hand the host a URI to open, e.g. an `sms:` deep link.
    fn open_uri(&self, uri: &str);
}
