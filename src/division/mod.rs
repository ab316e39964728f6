pub mod arithmetic;
pub mod error;
pub mod input;
pub mod io;
pub mod messages;
pub mod session;

pub use error::{ErrorKind, Result, ToolError};
pub use session::{DivisionTool, Outcome};
