use glyphgrid_config::Color;
use image::{Rgba, RgbaImage, imageops};

/// Destination the renderer paints into.
pub trait PaintSink {
    /// Copy `bitmap` with its top-left corner at pixel `(x, y)`.
    fn blit(&mut self, bitmap: &RgbaImage, x: u32, y: u32);

    /// Fill a solid rectangle.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);
}

/// In-memory RGBA canvas. Anything painted past its edges is clipped.
#[derive(Debug, Clone)]
pub struct CanvasSink {
    canvas: RgbaImage,
}

impl CanvasSink {
    /// Transparent black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
        }
    }

    pub fn with_background(width: u32, height: u32, color: Color) -> Self {
        Self {
            canvas: RgbaImage::from_pixel(width, height, Rgba(color.as_array())),
        }
    }

    /// Canvas sized for `columns` x `rows` cells.
    pub fn for_grid(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> Self {
        Self::new(columns.saturating_mul(cell_width), rows.saturating_mul(cell_height))
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.canvas
            .get_pixel_checked(x, y)
            .map(|p| Color::from(p.0))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }
}

impl PaintSink for CanvasSink {
    fn blit(&mut self, bitmap: &RgbaImage, x: u32, y: u32) {
        imageops::replace(&mut self.canvas, bitmap, i64::from(x), i64::from(y));
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let right = x.saturating_add(width).min(self.canvas.width());
        let bottom = y.saturating_add(height).min(self.canvas.height());
        let pixel = Rgba(color.as_array());
        for py in y..bottom {
            for px in x..right {
                self.canvas.put_pixel(px, py, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut sink = CanvasSink::new(4, 4);
        let red = Color::rgb(255, 0, 0);
        sink.fill_rect(2, 3, 10, 10, red);
        assert_eq!(sink.pixel(3, 3), Some(red));
        assert_eq!(sink.pixel(1, 3), Some(Color::new(0, 0, 0, 0)));
        assert_eq!(sink.pixel(3, 2), Some(Color::new(0, 0, 0, 0)));
        assert_eq!(sink.pixel(4, 4), None);
    }

    #[test]
    fn test_blit_clips_at_edge() {
        let mut sink = CanvasSink::with_background(3, 3, Color::BLACK);
        let tile = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        sink.blit(&tile, 2, 2);
        assert_eq!(sink.pixel(2, 2), Some(Color::rgb(9, 9, 9)));
        assert_eq!(sink.pixel(1, 1), Some(Color::BLACK));
    }
}
