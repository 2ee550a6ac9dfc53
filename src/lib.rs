// Battery gauge firmware (ESP32-C3, SSD1306 128x64 over I2C)

#![no_std]

pub mod board;
