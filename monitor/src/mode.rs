// Mode switch: the pin idles high on its pull-up (TX pack); grounding it
// selects the RX pack. Read once per pass, no debounce.

use core::fmt;

use embedded_hal::digital::InputPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Rx,
    Tx,
}

impl Mode {
    pub const fn from_level(high: bool) -> Self {
        if high { Mode::Tx } else { Mode::Rx }
    }

    pub fn read<P: InputPin>(pin: &mut P) -> Result<Self, P::Error> {
        pin.is_high().map(Self::from_level)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Mode::Rx => "RX",
            Mode::Tx => "TX",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
