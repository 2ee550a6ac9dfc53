// Averaging acquisition on one ADC channel.
//
// One throwaway conversion lets the sample-and-hold settle after the mux
// switches to the battery channel, then `sample_count` conversions are
// summed, each followed by `sample_interval_ms`. No outlier rejection.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::config::MonitorConfig;

/// One-shot conversion on a single, already-configured ADC channel.
///
/// Same shape as the HAL's `read_oneshot`: `WouldBlock` while the
/// conversion is in flight, the raw reading once it completes.
pub trait AdcChannel {
    type Error: core::fmt::Debug;

    fn read_oneshot(&mut self) -> nb::Result<u16, Self::Error>;
}

impl<T: AdcChannel + ?Sized> AdcChannel for &mut T {
    type Error = T::Error;

    fn read_oneshot(&mut self) -> nb::Result<u16, Self::Error> {
        T::read_oneshot(self)
    }
}

/// Retained conversions of one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acquisition {
    pub sum: u32,
    pub count: u8,
    pub min: u16,
    pub max: u16,
}

impl Acquisition {
    pub const fn new() -> Self {
        Self {
            sum: 0,
            count: 0,
            min: u16::MAX,
            max: 0,
        }
    }

    pub fn push(&mut self, raw: u16) {
        self.sum += raw as u32;
        self.count += 1;
        self.min = self.min.min(raw);
        self.max = self.max.max(raw);
    }

    pub fn average(&self) -> f32 {
        crate::convert::average_raw(self.sum, self.count)
    }

    // max - min over the window, 0 when empty
    pub fn spread(&self) -> u16 {
        if self.count == 0 {
            0
        } else {
            self.max - self.min
        }
    }
}

impl Default for Acquisition {
    fn default() -> Self {
        Self::new()
    }
}

pub fn acquire<A, D>(
    adc: &mut A,
    delay: &mut D,
    cfg: &MonitorConfig,
) -> Result<Acquisition, A::Error>
where
    A: AdcChannel,
    D: DelayNs,
{
    if cfg.discard_first {
        let settle = nb::block!(adc.read_oneshot())?;
        trace!("adc: discarded settling read {}", settle);
    }

    let mut acq = Acquisition::new();
    for _ in 0..cfg.sample_count {
        let raw = nb::block!(adc.read_oneshot())?;
        acq.push(raw);
        delay.delay_ms(cfg.sample_interval_ms);
    }

    debug!(
        "adc: {} samples sum={} avg={} spread={}",
        acq.count,
        acq.sum,
        acq.average(),
        acq.spread()
    );
    Ok(acq)
}
