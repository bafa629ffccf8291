pub mod generate;
pub mod history;
pub mod template;
pub mod vars;
