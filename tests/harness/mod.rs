//! Integration Test Harness
//!
//! - `TestHost` - In-process command table with scripted dice
//! - `TestCli` - Runs the real logidice binary in a scratch directory
//!
//! # Example
//!
//! ```rust,ignore
//! use harness::TestHost;
//!
//! #[tokio::test]
//! async fn test_one_die() {
//!     let host = TestHost::start([8]);
//!     let reply = host.roll("roll", "1d20").await.unwrap();
//!     assert_eq!(reply, "You rolled: 1d20 || 1d20: 8 = 8 || Total: *8*");
//! }
//! ```

mod cli;
mod host;

pub use cli::{stderr, stdout, TestCli};
pub use host::{Stars, TestHost};
