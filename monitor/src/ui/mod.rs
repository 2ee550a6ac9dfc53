// Widgets and the battery screen for a 128x64 1-bit panel.

mod label;
mod panel;
pub mod screen;
mod widget;

pub use label::{DynamicLabel, Label};
pub use panel::Panel;
pub use screen::BatteryScreen;
pub use widget::{Region, Widget};

pub const SCREEN_W: u16 = 128;
pub const SCREEN_H: u16 = 64;
