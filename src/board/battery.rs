// Battery sense channel: GPIO0 on ADC1 with curve calibration, so a
// completed conversion is already in millivolts (0..~2500 at 11dB).

use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcCalCurve, AdcPin},
    peripherals::{ADC1, GPIO0},
};
use gauge_monitor::AdcChannel;

pub type BatteryPin = AdcPin<GPIO0<'static>, ADC1<'static>, AdcCalCurve<ADC1<'static>>>;

pub struct BatteryAdc {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: BatteryPin,
}

impl BatteryAdc {
    pub fn new(adc: Adc<'static, ADC1<'static>, Blocking>, pin: BatteryPin) -> Self {
        Self { adc, pin }
    }
}

impl AdcChannel for BatteryAdc {
    type Error = ();

    fn read_oneshot(&mut self) -> nb::Result<u16, ()> {
        self.adc.read_oneshot(&mut self.pin)
    }
}
