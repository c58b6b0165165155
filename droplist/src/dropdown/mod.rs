//! Dropdown widget - a selectable, virtualized option list behind a
//! summary trigger.

mod config;
pub mod events;
pub mod render;
mod state;

pub use config::{DropdownConfig, HeightTag, WidthTag};
pub use events::EventResult;
pub use state::{Dropdown, Target};
