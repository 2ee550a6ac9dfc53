// Static and dynamic text labels, anchored at the top-left of their region.
// Label borrows its text; DynamicLabel<N> owns a fixed buffer
// and implements core::fmt::Write for formatted output.
// Both paint their whole region background before drawing text.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::PrimitiveStyle,
    text::{Baseline, Text},
};

use super::widget::{Region, Widget};

fn draw_text<D>(
    display: &mut D,
    region: Region,
    text: &str,
    font: &'static MonoFont<'static>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    region
        .to_rect()
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(display)?;

    if text.is_empty() {
        return Ok(());
    }

    let pos = Point::new(region.x as i32, region.y as i32);
    let style = MonoTextStyle::new(font, BinaryColor::On);
    Text::with_baseline(text, pos, style, Baseline::Top).draw(display)?;

    Ok(())
}

pub struct Label<'a> {
    region: Region,
    text: &'a str,
    font: &'static MonoFont<'static>,
}

impl<'a> Label<'a> {
    pub fn new(region: Region, text: &'a str, font: &'static MonoFont<'static>) -> Self {
        Self { region, text, font }
    }
}

impl Widget for Label<'_> {
    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        draw_text(display, self.region, self.text, self.font)
    }
}

pub struct DynamicLabel<const N: usize> {
    region: Region,
    buffer: [u8; N],
    len: usize,
    font: &'static MonoFont<'static>,
}

impl<const N: usize> DynamicLabel<N> {
    pub fn new(region: Region, font: &'static MonoFont<'static>) -> Self {
        Self {
            region,
            buffer: [0u8; N],
            len: 0,
            font,
        }
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.buffer[..self.len]).unwrap_or("")
    }

    // truncates on a char boundary so text() never falls back to ""
    fn push_str(&mut self, s: &str) {
        let available = N - self.len;
        let mut copy_len = s.len().min(available);
        while !s.is_char_boundary(copy_len) {
            copy_len -= 1;
        }
        self.buffer[self.len..self.len + copy_len].copy_from_slice(&s.as_bytes()[..copy_len]);
        self.len += copy_len;
    }
}

impl<const N: usize> Widget for DynamicLabel<N> {
    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        draw_text(display, self.region, self.text(), self.font)
    }
}

impl<const N: usize> core::fmt::Write for DynamicLabel<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
