// SSD1306 128x64 OLED on I2C0, buffered graphics mode.

use embedded_graphics::draw_target::DrawTarget;
use esp_hal::{Blocking, i2c::master::I2c};
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use super::pins::OLED_I2C_ADDR;

pub type Oled = Ssd1306<
    I2CInterface<I2c<'static, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub type OledError = <Oled as DrawTarget>::Error;

pub fn new_oled(i2c: I2c<'static, Blocking>) -> Oled {
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDR);
    Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode()
}

// power up the controller and clear its RAM
pub fn init_oled(oled: &mut Oled) -> Result<(), OledError> {
    oled.init()
}
