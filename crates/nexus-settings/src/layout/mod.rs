//! Layout system for the new-tab page.
//!
//! Three layouts exist: `focus`, `dashboard`, and `workflow`. Each keeps its
//! own set of enabled widgets. The settings panel edits one layout at a time
//! (the active layout) and persists the whole map after every toggle.

mod presets;

pub use presets::{LayoutConfig, LayoutType, Layouts, ParseLayoutTypeError};
