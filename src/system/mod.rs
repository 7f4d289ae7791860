//! # System Interaction Layer
//!
//! Boundary between the command generation logic and the operating system.
//!
//! ## Modules
//!
//! - **`clipboard`**: Reads the input path from, and writes the generated command to,
//!   the system clipboard.
//! - **`executor`**: Runs the generated command through a shell, streaming its output
//!   to the user's terminal.
//!
//! Both expose a small trait so the invocation driver can be exercised without a
//! display server or a Gradle installation.

pub mod clipboard;
pub mod executor;
