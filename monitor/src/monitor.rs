// One acquisition-and-render pass over hardware owned by the monitor.
//
// Init -> Acquire -> Render -> Halt. Every value computed by a pass lives
// on the stack of that pass; the monitor only keeps hardware handles and
// its immutable config between passes.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use log::{debug, info};

use crate::acquire::{Acquisition, AdcChannel, acquire};
use crate::config::{MonitorConfig, Refresh};
use crate::convert;
use crate::error::MonitorError;
use crate::mode::Mode;
use crate::ui::{BatteryScreen, Panel};

/// Result of one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub mode: Mode,
    pub acquisition: Acquisition,
    pub pin_volts: f32,
    pub battery_volts: f32,
    pub charge_percent: f32,
}

impl Reading {
    pub fn from_acquisition(mode: Mode, acquisition: Acquisition, cfg: &MonitorConfig) -> Self {
        let pin_volts = convert::pin_volts(
            acquisition.sum,
            acquisition.count,
            cfg.reference_volts,
            cfg.adc_full_scale,
        );
        let battery_volts = convert::battery_volts(pin_volts, cfg.divider_ratio);
        let charge_percent = convert::charge_percent(battery_volts, cfg.full_charge.volts(mode));

        Self {
            mode,
            acquisition,
            pin_volts,
            battery_volts,
            charge_percent,
        }
    }
}

pub type PassError<ADC, MODE, PANEL> = MonitorError<
    <ADC as AdcChannel>::Error,
    <MODE as embedded_hal::digital::ErrorType>::Error,
    <PANEL as DrawTarget>::Error,
>;

pub struct BatteryMonitor<ADC, MODE, DELAY, PANEL> {
    adc: ADC,
    mode_pin: MODE,
    delay: DELAY,
    panel: PANEL,
    config: MonitorConfig,
}

impl<ADC, MODE, DELAY, PANEL> BatteryMonitor<ADC, MODE, DELAY, PANEL>
where
    ADC: AdcChannel,
    MODE: InputPin,
    DELAY: DelayNs,
    PANEL: Panel,
{
    pub fn new(
        adc: ADC,
        mode_pin: MODE,
        delay: DELAY,
        panel: PANEL,
        config: MonitorConfig,
    ) -> Result<Self, PassError<ADC, MODE, PANEL>> {
        config.validate()?;
        Ok(Self {
            adc,
            mode_pin,
            delay,
            panel,
            config,
        })
    }

    pub fn into_parts(self) -> (ADC, MODE, DELAY, PANEL) {
        (self.adc, self.mode_pin, self.delay, self.panel)
    }

    /// Clear and flush the panel so nothing stale shows while sampling.
    pub fn blank(&mut self) -> Result<(), PassError<ADC, MODE, PANEL>> {
        self.panel
            .clear(BinaryColor::Off)
            .map_err(MonitorError::Display)?;
        self.panel.flush().map_err(MonitorError::Display)
    }

    pub fn measure(&mut self) -> Result<Reading, PassError<ADC, MODE, PANEL>> {
        let mode = Mode::read(&mut self.mode_pin).map_err(MonitorError::ModePin)?;
        let acquisition =
            acquire(&mut self.adc, &mut self.delay, &self.config).map_err(MonitorError::Adc)?;

        let reading = Reading::from_acquisition(mode, acquisition, &self.config);
        debug!(
            "measure: {} pin={}V battery={}V {}%",
            reading.mode, reading.pin_volts, reading.battery_volts, reading.charge_percent
        );
        Ok(reading)
    }

    pub fn render(&mut self, reading: &Reading) -> Result<(), PassError<ADC, MODE, PANEL>> {
        let screen = BatteryScreen::new(reading, self.config.show_percent);

        self.panel
            .clear(BinaryColor::Off)
            .map_err(MonitorError::Display)?;
        screen.draw(&mut self.panel).map_err(MonitorError::Display)?;
        self.panel.flush().map_err(MonitorError::Display)?;

        info!("display: {}", screen.voltage_text());
        Ok(())
    }

    pub fn run_pass(&mut self) -> Result<Reading, PassError<ADC, MODE, PANEL>> {
        let reading = self.measure()?;
        self.render(&reading)?;
        Ok(reading)
    }

    /// Block until the next pass is due. Returns false when the monitor
    /// is single-shot and the caller should halt instead.
    pub fn wait_for_next_pass(&mut self) -> bool {
        match self.config.refresh {
            Refresh::Once => false,
            Refresh::Every { interval_ms } => {
                self.delay.delay_ms(interval_ms);
                true
            }
        }
    }
}
