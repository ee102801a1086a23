/// Erasable overlay the progress tracker draws on.
pub trait OverlaySurface {
    /// Makes every unit whose centre lies within `radius` of `(x, y)` transparent.
    fn erase_disc(&mut self, x: f64, y: f64, radius: f64);

    /// Makes the whole surface transparent.
    fn clear(&mut self);

    /// Paints the opaque overlay back over the whole surface.
    fn repaint(&mut self);

    fn transparent_units(&self) -> u64;

    fn total_units(&self) -> u64;
}

const OPAQUE: u8 = 255;
const TRANSPARENT: u8 = 0;

/// In-memory alpha mask, one byte per unit.
#[derive(Debug, Clone)]
pub struct PixelMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
    transparent: u64,
}

impl PixelMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![OPAQUE; width as usize * height as usize],
            transparent: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_transparent(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.alpha[self.index(x, y)] == TRANSPARENT
    }

    /// Full rescan of the alpha channel. Agrees with `transparent_units`.
    pub fn scan_transparent(&self) -> u64 {
        self.alpha.iter().filter(|&&a| a == TRANSPARENT).count() as u64
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl OverlaySurface for PixelMask {
    fn erase_disc(&mut self, x: f64, y: f64, radius: f64) {
        if !(x.is_finite() && y.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }
        if self.width == 0 || self.height == 0 {
            return;
        }

        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        let x0 = (x - radius).floor().clamp(0.0, max_x) as u32;
        let x1 = (x + radius).ceil().clamp(0.0, max_x) as u32;
        let y0 = (y - radius).floor().clamp(0.0, max_y) as u32;
        let y1 = (y + radius).ceil().clamp(0.0, max_y) as u32;
        let r2 = radius * radius;

        for py in y0..=y1 {
            let dy = f64::from(py) + 0.5 - y;
            for px in x0..=x1 {
                let dx = f64::from(px) + 0.5 - x;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let idx = self.index(px, py);
                if self.alpha[idx] != TRANSPARENT {
                    self.alpha[idx] = TRANSPARENT;
                    self.transparent += 1;
                }
            }
        }
    }

    fn clear(&mut self) {
        self.alpha.fill(TRANSPARENT);
        self.transparent = self.alpha.len() as u64;
    }

    fn repaint(&mut self) {
        self.alpha.fill(OPAQUE);
        self.transparent = 0;
    }

    fn transparent_units(&self) -> u64 {
        self.transparent
    }

    fn total_units(&self) -> u64 {
        self.alpha.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_erase_marks_centres_within_radius() {
        let mut mask = PixelMask::new(10, 10);
        mask.erase_disc(5.0, 5.0, 1.0);

        // centres (4.5, 4.5) .. (5.5, 5.5) are within ~0.71 of (5, 5)
        assert_eq!(mask.transparent_units(), 4);
        assert!(mask.is_transparent(4, 4));
        assert!(mask.is_transparent(5, 5));
        assert!(!mask.is_transparent(6, 5));
    }

    #[test]
    fn test_counter_matches_scan() {
        let mut mask = PixelMask::new(64, 32);
        for (x, y, r) in [(0.0, 0.0, 6.0), (20.0, 15.0, 9.5), (63.0, 31.0, 4.0), (22.0, 16.0, 9.0)] {
            mask.erase_disc(x, y, r);
            assert_eq!(mask.transparent_units(), mask.scan_transparent());
        }
    }

    #[test]
    fn test_disc_outside_surface_is_clipped() {
        let mut mask = PixelMask::new(8, 8);
        mask.erase_disc(-50.0, -50.0, 10.0);
        assert_eq!(mask.transparent_units(), 0);
        mask.erase_disc(f64::NAN, 2.0, 3.0);
        assert_eq!(mask.transparent_units(), 0);
    }

    #[test]
    fn test_clear_and_repaint() {
        let mut mask = PixelMask::new(4, 5);
        mask.clear();
        assert_eq!(mask.transparent_units(), 20);
        assert_eq!(mask.scan_transparent(), 20);

        mask.repaint();
        assert_eq!(mask.transparent_units(), 0);
        assert_eq!(mask.scan_transparent(), 0);
    }
}
