// Region geometry for the 128x64 panel.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn to_rect(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x as i32, self.y as i32),
            Size::new(self.w as u32, self.h as u32),
        )
    }

    pub const fn bottom(self) -> u16 {
        self.y + self.h
    }

    // region directly under this one, same x and width
    pub const fn below(self, gap: u16, h: u16) -> Self {
        Self::new(self.x, self.bottom() + gap, self.w, h)
    }

    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x as i32
            && p.y >= self.y as i32
            && p.x < (self.x + self.w) as i32
            && p.y < (self.y + self.h) as i32
    }
}

pub trait Widget {
    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;
}
