//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//!  0   | ADC1 - Battery   | 11.006:1 divider, 11dB attenuation
//!  6   | I2C0 SDA         | SSD1306 OLED
//!  7   | I2C0 SCL         | SSD1306 OLED
//! 10   | Digital - Mode   | Internal pullup; HIGH = TX, grounded = RX

// ----- OLED -----
pub const OLED_I2C_ADDR: u8 = 0x3C;
pub const OLED_I2C_FREQ_KHZ: u32 = 400;
