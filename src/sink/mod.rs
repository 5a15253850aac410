//! The sink core: log writer, destination handle, capture stream.
//!
//! This module provides:
//! - `LogWriter`: The polymorphic writer over file and stream destinations
//! - `SharedBuffer`: A cloneable in-memory stream for capture and tests
//!
//! The destination handle itself is crate-private; consumers depend only on
//! the writer surface and the error kinds.

mod handle;
mod memory;
mod writer;

pub use memory::SharedBuffer;
pub use writer::LogWriter;
