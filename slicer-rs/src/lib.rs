//! Slice strings, bytes and lines by `START[:END]` indices, where negative
//! indices count back from the end.
//!
//! ```
//! use slicer_rs::Slicer;
//!
//! let slicer = Slicer::new(false, &[0, -6]).unwrap();
//! assert_eq!(slicer.slice_str("Hello World").unwrap(), "Hello");
//! ```

pub mod cli;
pub mod error;
pub mod indices;
pub mod input;
mod must;
pub mod slicer;
pub mod source;

pub use error::{ErrorKind, SliceError};
pub use input::{Input, Output, Sliceable};
pub use slicer::{Mode, Slicer};
