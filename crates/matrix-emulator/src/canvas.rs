//! Off-screen pixel canvas
//!
//! The emulator's backing store: a `0xAARRGGBB` pixel buffer that the
//! render crate draws into through `DrawTarget<Rgb888>` and the window
//! layer copies to the softbuffer surface. Also the whole story in
//! headless mode, where tests read pixels straight out of it.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

/// Fixed-size RGB pixel buffer implementing [`DrawTarget`].
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelCanvas {
    /// A black canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xFF00_0000; (width * height) as usize],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw `0xAARRGGBB` pixel rows, top to bottom.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).map(|&p| {
            Rgb888::new(
                ((p >> 16) & 0xFF) as u8,
                ((p >> 8) & 0xFF) as u8,
                (p & 0xFF) as u8,
            )
        })
    }
}

impl OriginDimensions for PixelCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for PixelCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= self.width as i32
                || point.y >= self.height as i32
            {
                continue;
            }
            let index = (point.y as u32 * self.width + point.x as u32) as usize;
            if let Some(slot) = self.pixels.get_mut(index) {
                *slot = 0xFF00_0000
                    | (u32::from(color.r()) << 16)
                    | (u32::from(color.g()) << 8)
                    | u32::from(color.b());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn starts_black() {
        let canvas = PixelCanvas::new(8, 8);
        assert_eq!(canvas.pixel_at(0, 0), Some(Rgb888::BLACK));
        assert_eq!(canvas.pixel_at(8, 0), None);
    }

    #[test]
    fn draw_round_trips_through_pixel_at() {
        let mut canvas = PixelCanvas::new(8, 8);
        Rectangle::new(Point::new(2, 2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(255, 160, 0)))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.pixel_at(3, 3), Some(Rgb888::new(255, 160, 0)));
        assert_eq!(canvas.pixel_at(0, 0), Some(Rgb888::BLACK));
    }

    #[test]
    fn out_of_bounds_draws_are_dropped() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas
            .draw_iter([Pixel(Point::new(-1, 0), Rgb888::RED), Pixel(Point::new(4, 4), Rgb888::RED)])
            .unwrap();
        assert!(canvas.pixels().iter().all(|&p| p == 0xFF00_0000));
    }
}
