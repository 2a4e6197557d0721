//! Scenario Tests for logidice
//!
//! - Rolling: notation through the registered commands
//! - Rendering: single-line, multi-line and collapsible replies
//! - Cli: the binary, its flags and config file

pub mod rendering;
pub mod rolling;
