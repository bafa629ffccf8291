pub mod generated_id;
pub mod validation;

pub use generated_id::{history_id, template_id};
pub use validation::validate_storage_key;
