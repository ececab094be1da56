pub mod interpreter;
pub mod launch;
pub mod requirements;
pub mod venv;

pub use interpreter::{InterpreterError, PythonInterpreter};
pub use launch::LaunchError;
