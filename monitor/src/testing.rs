// Host-side stand-ins for the board peripherals.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin};

use crate::acquire::AdcChannel;
use crate::ui::{Panel, Region, SCREEN_H, SCREEN_W};

#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    let tolerance = 1e-3 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdcFault;

const MAX_SCRIPT: usize = 32;

/// Replays a fixed list of raw readings, wrapping around at the end.
pub struct ScriptedAdc {
    samples: [u16; MAX_SCRIPT],
    len: usize,
    attempts: usize,
    conversions: usize,
    busy_polls: u8,
    pending_busy: u8,
    fail_at: Option<usize>,
}

impl ScriptedAdc {
    pub fn new(samples: &[u16]) -> Self {
        assert!(!samples.is_empty() && samples.len() <= MAX_SCRIPT);
        let mut buf = [0u16; MAX_SCRIPT];
        buf[..samples.len()].copy_from_slice(samples);
        Self {
            samples: buf,
            len: samples.len(),
            attempts: 0,
            conversions: 0,
            busy_polls: 0,
            pending_busy: 0,
            fail_at: None,
        }
    }

    pub fn constant(raw: u16) -> Self {
        Self::new(&[raw])
    }

    // report WouldBlock this many times before each conversion completes
    pub fn busy_polls(mut self, polls: u8) -> Self {
        self.busy_polls = polls;
        self.pending_busy = polls;
        self
    }

    // the n-th conversion attempt (0-based) returns AdcFault
    pub fn fail_at(mut self, attempt: usize) -> Self {
        self.fail_at = Some(attempt);
        self
    }

    /// Completed conversions, settling read included.
    pub fn conversions(&self) -> usize {
        self.conversions
    }
}

impl AdcChannel for ScriptedAdc {
    type Error = AdcFault;

    fn read_oneshot(&mut self) -> nb::Result<u16, AdcFault> {
        if self.pending_busy > 0 {
            self.pending_busy -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.pending_busy = self.busy_polls;

        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(nb::Error::Other(AdcFault));
        }

        let raw = self.samples[self.conversions % self.len];
        self.conversions += 1;
        Ok(raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct FixedPin {
    level: Option<bool>,
}

impl FixedPin {
    pub fn high() -> Self {
        Self { level: Some(true) }
    }

    pub fn low() -> Self {
        Self { level: Some(false) }
    }

    pub fn faulty() -> Self {
        Self { level: None }
    }
}

impl ErrorType for FixedPin {
    type Error = PinFault;
}

impl InputPin for FixedPin {
    fn is_high(&mut self) -> Result<bool, PinFault> {
        self.level.ok_or(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, PinFault> {
        self.level.map(|high| !high).ok_or(PinFault)
    }
}

/// Steps through a list of levels, one per read, holding the last one.
pub struct LevelScript {
    levels: [bool; MAX_SCRIPT],
    len: usize,
    reads: usize,
}

impl LevelScript {
    pub fn new(levels: &[bool]) -> Self {
        assert!(!levels.is_empty() && levels.len() <= MAX_SCRIPT);
        let mut buf = [false; MAX_SCRIPT];
        buf[..levels.len()].copy_from_slice(levels);
        Self {
            levels: buf,
            len: levels.len(),
            reads: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    fn next_level(&mut self) -> bool {
        let level = self.levels[self.reads.min(self.len - 1)];
        self.reads += 1;
        level
    }
}

impl ErrorType for LevelScript {
    type Error = PinFault;
}

impl InputPin for LevelScript {
    fn is_high(&mut self) -> Result<bool, PinFault> {
        Ok(self.next_level())
    }

    fn is_low(&mut self) -> Result<bool, PinFault> {
        Ok(!self.next_level())
    }
}

/// Delay that returns immediately and keeps a tally.
pub struct RecordingDelay {
    total_ns: u64,
    calls: usize,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            total_ns: 0,
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
        self.calls += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelFault;

const W: usize = SCREEN_W as usize;
const H: usize = SCREEN_H as usize;

/// 128x64 frame buffer panel.
pub struct FrameBuffer {
    pixels: [[bool; W]; H],
    flushes: usize,
    clears: usize,
    fail_flush: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            flushes: 0,
            clears: 0,
            fail_flush: false,
        }
    }

    pub fn failing_flush(mut self) -> Self {
        self.fail_flush = true;
        self
    }

    pub fn fill_all(&mut self) {
        self.pixels = [[true; W]; H];
    }

    pub fn lit(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&p| p).count()
    }

    pub fn lit_in(&self, region: Region) -> usize {
        let mut n = 0;
        for (y, row) in self.pixels.iter().enumerate() {
            for (x, &p) in row.iter().enumerate() {
                if p && region.contains(Point::new(x as i32, y as i32)) {
                    n += 1;
                }
            }
        }
        n
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_W as u32, SCREEN_H as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = PanelFault;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as usize) < W && (p.y as usize) < H {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clears += 1;
        self.pixels = [[color.is_on(); W]; H];
        Ok(())
    }
}

impl Panel for FrameBuffer {
    fn flush(&mut self) -> Result<(), PanelFault> {
        if self.fail_flush {
            return Err(PanelFault);
        }
        self.flushes += 1;
        Ok(())
    }
}
