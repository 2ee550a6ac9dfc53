// Per-device calibration and run policy.
//
// Defaults reproduce the reference board: 10-bit ADC against a 5.01V
// rail, 11.006:1 divider, RX/TX packs full at 12.38V/13.59V.
// Builders are const so a board can declare its calibration as a const.

use crate::error::ConfigError;
use crate::mode::Mode;

pub const DEFAULT_REFERENCE_VOLTS: f32 = 5.01;
pub const DEFAULT_ADC_FULL_SCALE: u16 = 1024;
pub const DEFAULT_DIVIDER_RATIO: f32 = 11.006;

pub const DEFAULT_SAMPLE_COUNT: u8 = 10;
pub const DEFAULT_SAMPLE_INTERVAL_MS: u32 = 10;

pub const RX_FULL_CHARGE_VOLTS: f32 = 12.38;
pub const TX_FULL_CHARGE_VOLTS: f32 = 13.59;

/// Voltage treated as 100% for each switch position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FullCharge {
    pub rx_volts: f32,
    pub tx_volts: f32,
}

impl FullCharge {
    pub const DEFAULT: Self = Self {
        rx_volts: RX_FULL_CHARGE_VOLTS,
        tx_volts: TX_FULL_CHARGE_VOLTS,
    };

    pub const fn volts(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Rx => self.rx_volts,
            Mode::Tx => self.tx_volts,
        }
    }
}

impl Default for FullCharge {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What happens after a pass has been rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Refresh {
    /// Halt after the first pass; the reading stays on screen until power-off.
    #[default]
    Once,
    /// Sleep `interval_ms`, then re-read both the mode switch and the battery.
    Every { interval_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorConfig {
    /// ADC reference voltage; a reading of `adc_full_scale` equals this.
    pub reference_volts: f32,
    pub adc_full_scale: u16,
    /// Battery volts per volt at the ADC pin.
    pub divider_ratio: f32,
    /// Number of conversions that are averaged.
    pub sample_count: u8,
    /// Take one throwaway conversion first so the sample-and-hold settles.
    pub discard_first: bool,
    pub sample_interval_ms: u32,
    pub full_charge: FullCharge,
    pub show_percent: bool,
    pub refresh: Refresh,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        reference_volts: DEFAULT_REFERENCE_VOLTS,
        adc_full_scale: DEFAULT_ADC_FULL_SCALE,
        divider_ratio: DEFAULT_DIVIDER_RATIO,
        sample_count: DEFAULT_SAMPLE_COUNT,
        discard_first: true,
        sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        full_charge: FullCharge::DEFAULT,
        show_percent: true,
        refresh: Refresh::Once,
    };

    pub const fn with_adc(mut self, reference_volts: f32, full_scale: u16) -> Self {
        self.reference_volts = reference_volts;
        self.adc_full_scale = full_scale;
        self
    }

    pub const fn with_divider_ratio(mut self, ratio: f32) -> Self {
        self.divider_ratio = ratio;
        self
    }

    pub const fn with_sampling(mut self, count: u8, interval_ms: u32) -> Self {
        self.sample_count = count;
        self.sample_interval_ms = interval_ms;
        self
    }

    pub const fn with_discard_first(mut self, discard: bool) -> Self {
        self.discard_first = discard;
        self
    }

    pub const fn with_full_charge(mut self, rx_volts: f32, tx_volts: f32) -> Self {
        self.full_charge = FullCharge { rx_volts, tx_volts };
        self
    }

    pub const fn with_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    pub const fn with_refresh(mut self, refresh: Refresh) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.adc_full_scale == 0 {
            return Err(ConfigError::ZeroFullScale);
        }
        if !self.reference_volts.is_finite() || self.reference_volts <= 0.0 {
            return Err(ConfigError::BadReference);
        }
        // a divider can only attenuate
        if !self.divider_ratio.is_finite() || self.divider_ratio < 1.0 {
            return Err(ConfigError::BadDivider);
        }
        for mode in [Mode::Rx, Mode::Tx] {
            let volts = self.full_charge.volts(mode);
            if !volts.is_finite() || volts <= 0.0 {
                return Err(ConfigError::BadFullCharge(mode));
            }
        }
        if self.refresh == (Refresh::Every { interval_ms: 0 }) {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
