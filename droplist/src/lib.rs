//! A selectable dropdown list for the terminal.
//!
//! The [`Dropdown`] supports single- and multi-select modes, renders only the
//! option rows visible in its viewport (so 100,000+ options cost the same as
//! ten), and closes when a pointer press lands outside it.
//!
//! Widgets draw into a [`Buffer`]; the [`Terminal`] flushes buffers to a
//! crossterm backend.

pub mod buffer;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hit;
pub mod option;
pub mod popover;
pub mod selection;
pub mod style;
pub mod terminal;
pub mod text;
pub mod virtual_list;
pub mod widgets;

pub use buffer::{Buffer, Cell};
pub use dropdown::{Dropdown, DropdownConfig, EventResult, HeightTag, Target, WidthTag};
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers, MouseButton, PointerEvent};
pub use geometry::Rect;
pub use hit::HitMap;
pub use option::SelectOption;
pub use popover::{DisplayState, PointerListeners, Popover, Subscription};
pub use selection::{ChangeCallback, SelectionMode, SelectionSet, SelectionStore};
pub use style::{Border, Palette, Rgb, TextStyle};
pub use terminal::Terminal;
pub use virtual_list::{RowSlot, VirtualList};
pub use widgets::{Button, Panel};
