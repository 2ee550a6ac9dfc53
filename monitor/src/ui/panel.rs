// Buffered 1-bit panel: draw into RAM, then push the frame in one go.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

pub trait Panel: DrawTarget<Color = BinaryColor> {
    /// Send the whole frame buffer to the controller.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

#[cfg(feature = "ssd1306")]
mod ssd1306_panel {
    use ssd1306::{Ssd1306, mode::BufferedGraphicsMode, prelude::*};

    use super::Panel;

    impl<DI, SIZE> Panel for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
    where
        DI: WriteOnlyDataCommand,
        SIZE: DisplaySize,
    {
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ssd1306::flush(self)
        }
    }
}
