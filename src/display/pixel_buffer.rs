use crate::raster::{Color, Surface};

/// Write one ABGR pixel to a 4-byte slice (RGBA8888 little-endian order)
#[inline]
fn write_pixel(dest: &mut [u8], color: Color) {
    dest[0] = 255; // A
    dest[1] = color.b;
    dest[2] = color.g;
    dest[3] = color.r;
}

/// RGBA8888 pixel buffer for software rendering.
/// This is the canvas - every primitive the rasterizer draws lands here,
/// and the raw bytes go straight to the SDL streaming texture.
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Byte offset of the pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Clear to a solid color using u32 fill (4x faster than byte-by-byte)
    pub fn clear(&mut self, color: Color) {
        let pixel = u32::from_ne_bytes([255, color.b, color.g, color.r]);

        // Safety: pixels.len() is always divisible by 4 (width * height * 4).
        // write_unaligned avoids assuming alignment of Vec<u8>.
        let ptr = self.pixels.as_mut_ptr() as *mut u32;
        let len = self.pixels.len() / 4;
        for i in 0..len {
            unsafe {
                ptr.add(i).write_unaligned(pixel);
            }
        }
    }

    /// Read a pixel (bounds checked). None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(Color::new(
                self.pixels[idx + 3],
                self.pixels[idx + 2],
                self.pixels[idx + 1],
            ))
        } else {
            None
        }
    }

    /// Copy contents from another buffer (must be the same size)
    pub fn copy_from(&mut self, src: &PixelBuffer) {
        if self.pixels.len() == src.pixels.len() {
            self.pixels.copy_from_slice(&src.pixels);
        }
    }

    /// Raw bytes for SDL texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Set a single pixel. Out-of-bounds writes are dropped, never a fault.
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], color);
        }
    }

    /// Row-write fast path: clip once, then step the byte index by 4
    fn hspan(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        let mut idx = self.pixel_index(start as u32, y as u32);
        for _ in 0..=(end - start) {
            write_pixel(&mut self.pixels[idx..idx + 4], color);
            idx += 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::new(10, 20, 30);

    #[test]
    fn test_set_get_roundtrip() {
        let mut buf = PixelBuffer::with_size(8, 8);
        buf.set_pixel(3, 4, INK);
        assert_eq!(buf.get_pixel(3, 4), Some(INK));
        assert_eq!(buf.get_pixel(4, 3), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut buf = PixelBuffer::with_size(4, 4);
        let before = buf.as_bytes().to_vec();
        buf.set_pixel(-1, 0, INK);
        buf.set_pixel(4, 0, INK);
        buf.set_pixel(0, -1, INK);
        buf.set_pixel(0, 4, INK);
        assert_eq!(buf.as_bytes(), &before[..]);
        assert_eq!(buf.get_pixel(-1, 0), None);
        assert_eq!(buf.get_pixel(4, 4), None);
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut buf = PixelBuffer::with_size(5, 3);
        buf.clear(Color::new(200, 100, 50));
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(buf.get_pixel(x, y), Some(Color::new(200, 100, 50)));
            }
        }
    }

    #[test]
    fn test_hspan_clips_to_row() {
        let mut buf = PixelBuffer::with_size(6, 4);
        buf.hspan(-3, 9, 2, INK);
        for x in 0..6 {
            assert_eq!(buf.get_pixel(x, 2), Some(INK));
            assert_eq!(buf.get_pixel(x, 1), Some(Color::BLACK));
        }
        // Fully off-surface rows are a no-op
        let before = buf.as_bytes().to_vec();
        buf.hspan(0, 5, -1, INK);
        buf.hspan(0, 5, 4, INK);
        assert_eq!(buf.as_bytes(), &before[..]);
    }

    #[test]
    fn test_hspan_matches_pixel_loop() {
        let mut fast = PixelBuffer::with_size(10, 10);
        let mut slow = PixelBuffer::with_size(10, 10);
        fast.hspan(7, 2, 5, INK);
        for x in 2..=7 {
            slow.set_pixel(x, 5, INK);
        }
        assert_eq!(fast.as_bytes(), slow.as_bytes());
    }

    #[test]
    fn test_copy_from_same_size() {
        let mut a = PixelBuffer::with_size(4, 4);
        let mut b = PixelBuffer::with_size(4, 4);
        a.set_pixel(1, 1, INK);
        b.copy_from(&a);
        assert_eq!(b.get_pixel(1, 1), Some(INK));
    }
}
