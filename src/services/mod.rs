mod clipboard_system;
pub(crate) mod collection;
mod history_log;
mod key_value_filesystem;
mod key_value_memory;
mod template_library;

pub use clipboard_system::SystemClipboard;
pub use history_log::{HISTORY_KEY, HistoryLog};
pub use key_value_filesystem::FilesystemKeyValueStore;
pub use key_value_memory::MemoryKeyValueStore;
pub use template_library::{TemplateLibrary, USER_TEMPLATES_KEY};
