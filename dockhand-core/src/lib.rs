pub mod cancel;
pub mod command;
pub mod error;
pub mod output_macros;

pub use cancel::CancelToken;
pub use command::{
    is_tool_installed, run_captured, run_captured_with_input, run_captured_with_timeout,
    run_visible, CommandOutput,
};
pub use error::{DockError, Result};
