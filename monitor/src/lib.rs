// Battery voltage monitor for a divided-battery ADC input, a two-position
// mode switch and a 128x64 1-bit panel.
//
// Board-independent: the hardware comes in through embedded-hal traits,
// AdcChannel and Panel, so everything here also runs on the host.

#![cfg_attr(not(test), no_std)]

pub mod acquire;
pub mod config;
pub mod convert;
pub mod error;
pub mod mode;
pub mod monitor;
pub mod ui;

#[cfg(test)]
mod testing;

pub use acquire::{Acquisition, AdcChannel, acquire};
pub use config::{FullCharge, MonitorConfig, Refresh};
pub use error::{ConfigError, MonitorError};
pub use mode::Mode;
pub use monitor::{BatteryMonitor, PassError, Reading};
pub use ui::{BatteryScreen, Panel};
