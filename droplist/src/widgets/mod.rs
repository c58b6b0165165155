//! Visual wrappers the dropdown is assembled from.

mod button;
mod panel;

pub use button::Button;
pub use panel::Panel;
