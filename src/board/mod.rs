//! ESP32-C3 battery gauge board support
//!
//! Maps the physical hardware to the three things the monitor needs:
//! the battery sense ADC channel, the mode switch and the OLED panel.
//! Pin numbers and per-board calibration live here and nowhere else.

pub mod battery;
pub mod display;
pub mod pins;

pub use battery::BatteryAdc;
pub use display::{Oled, OledError, init_oled};

use esp_hal::{
    analog::adc::{Adc, AdcCalCurve, AdcConfig, Attenuation},
    gpio::{Input, InputConfig, Pull},
    i2c::master::{Config as I2cConfig, ConfigError, I2c},
    peripherals::{ADC1, Peripherals},
    time::Rate,
};
use gauge_monitor::{MonitorConfig, Refresh};

use pins::OLED_I2C_FREQ_KHZ;

/// Calibration for this board.
///
/// Curve-calibrated ADC1 reads millivolts, so 2500 counts span 2.5V.
/// Divider and full-charge references are the reference board's.
pub const CALIBRATION: MonitorConfig = MonitorConfig::DEFAULT
    .with_adc(2.5, 2500)
    .with_refresh(REFRESH);

#[cfg(not(feature = "periodic-refresh"))]
const REFRESH: Refresh = Refresh::Once;
#[cfg(feature = "periodic-refresh")]
const REFRESH: Refresh = Refresh::Every { interval_ms: 60_000 };

/// Complete board hardware, ready to hand to the monitor.
pub struct Board {
    pub battery: BatteryAdc,
    pub mode_switch: Input<'static>,
    pub oled: Oled,
}

impl Board {
    pub fn init(p: Peripherals) -> Result<Self, ConfigError> {
        let mut adc_cfg = AdcConfig::new();
        let battery_pin =
            adc_cfg.enable_pin_with_cal::<_, AdcCalCurve<ADC1>>(p.GPIO0, Attenuation::_11dB);
        let adc = Adc::new(p.ADC1, adc_cfg);

        // idles high; an external switch to ground selects RX
        let mode_switch = Input::new(p.GPIO10, InputConfig::default().with_pull(Pull::Up));

        let i2c_cfg = I2cConfig::default().with_frequency(Rate::from_khz(OLED_I2C_FREQ_KHZ));
        let i2c = I2c::new(p.I2C0, i2c_cfg)?
            .with_sda(p.GPIO6)
            .with_scl(p.GPIO7);

        Ok(Board {
            battery: BatteryAdc::new(adc, battery_pin),
            mode_switch,
            oled: display::new_oled(i2c),
        })
    }
}
