mod clipboard_writer;
mod key_value_store;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use key_value_store::KeyValueStore;
