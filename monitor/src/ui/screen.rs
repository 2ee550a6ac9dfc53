// Battery reading layout for a 128x64 panel.
//
//   y=0   "Battery voltage:"        6x10
//   y=10  (blank line)
//   y=20  "12.34 V"                 10x20
//   y=44  "RX 99%"                  6x10, optional

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::ascii::{FONT_6X10, FONT_10X20},
    pixelcolor::BinaryColor,
    prelude::*,
};

use super::label::{DynamicLabel, Label};
use super::widget::{Region, Widget};
use super::{SCREEN_H, SCREEN_W};
use crate::monitor::Reading;

pub const TITLE: &str = "Battery voltage:";

pub const TITLE_REGION: Region = Region::new(0, 0, SCREEN_W, 10);
pub const VOLTAGE_REGION: Region = TITLE_REGION.below(10, 20);
pub const PERCENT_REGION: Region = VOLTAGE_REGION.below(4, 10);

const _: () = assert!(PERCENT_REGION.bottom() <= SCREEN_H);

pub struct BatteryScreen {
    voltage: DynamicLabel<12>,
    percent: Option<DynamicLabel<12>>,
}

impl BatteryScreen {
    pub fn new(reading: &Reading, show_percent: bool) -> Self {
        // DynamicLabel truncates, never errors
        let mut voltage = DynamicLabel::new(VOLTAGE_REGION, &FONT_10X20);
        let _ = write!(voltage, "{:.2} V", reading.battery_volts);

        let percent = show_percent.then(|| {
            let mut label = DynamicLabel::new(PERCENT_REGION, &FONT_6X10);
            let _ = write!(label, "{} {:.0}%", reading.mode, reading.charge_percent);
            label
        });

        Self { voltage, percent }
    }

    pub fn voltage_text(&self) -> &str {
        self.voltage.text()
    }

    pub fn percent_text(&self) -> Option<&str> {
        self.percent.as_ref().map(|l| l.text())
    }

    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Label::new(TITLE_REGION, TITLE, &FONT_6X10).draw(display)?;
        self.voltage.draw(display)?;
        if let Some(percent) = &self.percent {
            percent.draw(display)?;
        }
        Ok(())
    }
}
