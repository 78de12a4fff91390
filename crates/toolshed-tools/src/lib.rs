mod error;
mod strategy;
mod tool;
mod toolbox;

pub use error::{Result, ToolError};
pub use strategy::{import_binary_name, InstallStrategy};
pub use tool::Tool;
pub use toolbox::Toolbox;
