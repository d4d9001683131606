// Drawing surfaces the simulator can paint into.
// `PixelSurface` is an in-memory RGBA byte buffer, used off the browser; the
// canvas backed one lives in canvas.rs.

use crate::color::Color;

pub trait Surface {
    /// Pixel buffer size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Resizes the pixel buffer. Contents after a resize are unspecified.
    fn resize(&mut self, width: u32, height: u32);

    /// Clears every pixel to fully transparent.
    fn clear(&mut self);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

pub struct PixelSurface {
    width: u32,
    height: u32,
    pixel_data: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> PixelSurface {
        PixelSurface {
            width,
            height,
            pixel_data: vec![0x00; (width * height * 4) as usize],
        }
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.get_pixel_index(x, y).map(|idx| {
            let mut px = [0u8; 4];
            px.copy_from_slice(&self.pixel_data[idx..idx + 4]);
            px
        })
    }

    fn get_pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(((y * self.width as i32 + x) * 4) as usize)
        } else {
            None
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.get_pixel_index(x, y) {
            color.blend_onto(&mut self.pixel_data[idx..idx + 4]);
        }
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixel_data.clear();
        self.pixel_data.resize((width * height * 4) as usize, 0x00);
    }

    fn clear(&mut self) {
        for byte in self.pixel_data.iter_mut() {
            *byte = 0x00;
        }
    }

    // Covers every pixel whose center falls inside the circle.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        let min_x = (x - radius).floor() as i32;
        let max_x = (x + radius).ceil() as i32;
        let min_y = (y - radius).floor() as i32;
        let max_y = (y + radius).ceil() as i32;
        let radius_sq = radius * radius;
        for pixel_y in min_y..=max_y {
            for pixel_x in min_x..=max_x {
                let dx = pixel_x as f64 + 0.5 - x;
                let dy = pixel_y as f64 + 0.5 - y;
                if dx * dx + dy * dy <= radius_sq {
                    self.blend_pixel(pixel_x, pixel_y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_covers_its_center_only() {
        let mut surface = PixelSurface::new(20, 20);
        surface.fill_circle(10.0, 10.0, 2.0, Color::GOLD);
        assert_eq!(surface.pixel(10, 10), Some([212, 175, 55, 255]));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(15, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn clear_makes_everything_transparent() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_circle(4.0, 4.0, 3.0, Color::GOLD.with_alpha(0.4));
        surface.clear();
        assert!(surface.pixel_data().iter().all(|b| *b == 0));
    }

    #[test]
    fn off_surface_circles_are_clipped() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_circle(-10.0, 50.0, 2.5, Color::GOLD);
        surface.fill_circle(0.0, 0.0, 1.0, Color::GOLD);
        assert_eq!(surface.pixel(0, 0), Some([212, 175, 55, 255]));
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn resize_reallocates_buffer() {
        let mut surface = PixelSurface::new(4, 4);
        surface.resize(10, 3);
        assert_eq!(surface.size(), (10, 3));
        assert_eq!(surface.pixel_data().len(), 10 * 3 * 4);
    }

    #[test]
    fn later_draws_composite_over_earlier() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_circle(2.0, 2.0, 1.0, Color::GOLD.with_alpha(0.5));
        surface.fill_circle(2.0, 2.0, 1.0, Color::GOLD.with_alpha(0.5));
        let px = surface.pixel(2, 2).unwrap();
        assert!(px[3] > 128 && px[3] < 255);
    }
}
