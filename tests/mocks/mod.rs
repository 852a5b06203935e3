mod mock_host;
mod mock_store;

// Each test binary compiles this module separately and uses a different
// subset of the doubles.
#[allow(unused_imports)]
pub use mock_host::{RecordingDispatcher, RecordingSaver, SavedFile};
#[allow(unused_imports)]
pub use mock_store::MockKeyValueStore;
