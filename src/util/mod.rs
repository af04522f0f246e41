//! Page helpers with no network involvement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module talks to the document only through small traits so the
//! browser adapters in `dom` can be swapped for test doubles.

pub mod alerts;
pub mod clock;
pub mod format;
pub mod theme;
