use crate::{Color, Error, Pixel, Point};

/// Owned `width x height` pixel grid, row-major, with visited flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl Raster {
    pub fn from_vec(width: usize, height: usize, data: Vec<Pixel>) -> Result<Self, Error> {
        let expected = checked_len(width, height, data.len())?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_colors(width: usize, height: usize, colors: Vec<Color>) -> Result<Self, Error> {
        let data = colors.into_iter().map(Pixel::new).collect();
        Self::from_vec(width, height, data)
    }

    /// Builds a raster from interleaved 8-bit RGB samples.
    pub fn from_rgb_bytes(width: usize, height: usize, rgb: &[u8]) -> Result<Self, Error> {
        let expected = checked_len(width, height, rgb.len())?
            .checked_mul(3)
            .ok_or(Error::SizeMismatch {
                expected: usize::MAX,
                actual: rgb.len(),
            })?;
        if rgb.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }

        let data = rgb
            .chunks_exact(3)
            .map(|px| Pixel::new(Color::new(px[0], px[1], px[2])))
            .collect();

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn new_fill(width: usize, height: usize, color: Color) -> Self {
        let len = width.checked_mul(height).expect("raster size overflow");
        Self {
            width,
            height,
            data: vec![Pixel::new(color); len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Returns the stored pixel, or [`Pixel::SENTINEL`] outside the image.
    pub fn get(&self, p: Point) -> Pixel {
        match self.index(p) {
            Some(idx) => self.data[idx],
            None => Pixel::SENTINEL,
        }
    }

    pub fn is_black(&self, p: Point) -> bool {
        self.get(p).is_black()
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.get(p).visited
    }

    pub fn set_visited(&mut self, p: Point, flag: bool) -> Result<(), Error> {
        let idx = self.index(p).ok_or(Error::OutOfBounds)?;
        self.data[idx].visited = flag;
        Ok(())
    }

    pub fn set_color(&mut self, p: Point, color: Color) -> Result<(), Error> {
        let idx = self.index(p).ok_or(Error::OutOfBounds)?;
        self.data[idx].color = color;
        Ok(())
    }

    pub fn count_visited(&self) -> usize {
        self.data.iter().filter(|px| px.visited).count()
    }

    /// Iterates every in-bounds position, row by row.
    pub fn positions_row_major(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// Iterates every in-bounds position, column by column.
    pub fn positions_column_major(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..w).flat_map(move |x| (0..h).map(move |y| Point::new(x, y)))
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }

        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }
}

fn checked_len(width: usize, height: usize, actual: usize) -> Result<usize, Error> {
    width.checked_mul(height).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::Raster;
    use crate::{Color, Error, Pixel, Point};

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn out_of_bounds_reads_return_sentinel() {
        let raster = Raster::new_fill(3, 2, RED);

        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(3, 0),
            Point::new(0, 2),
            Point::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(raster.get(p), Pixel::SENTINEL);
            assert!(raster.is_black(p));
            assert!(raster.is_visited(p));
        }

        assert_eq!(raster.get(Point::new(2, 1)), Pixel::new(RED));
    }

    #[test]
    fn size_mismatch_is_reported() {
        let err = Raster::from_colors(2, 2, vec![RED; 3]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );

        let err = Raster::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn rgb_bytes_are_row_major() {
        let raster = Raster::from_rgb_bytes(2, 2, &[1, 2, 3, 0, 0, 0, 7, 8, 9, 10, 11, 12])
            .expect("valid raster");

        assert_eq!(raster.get(Point::new(0, 0)).color, Color::new(1, 2, 3));
        assert!(raster.is_black(Point::new(1, 0)));
        assert_eq!(raster.get(Point::new(0, 1)).color, Color::new(7, 8, 9));
        assert_eq!(raster.get(Point::new(1, 1)).color, Color::new(10, 11, 12));
    }

    #[test]
    fn set_visited_only_touches_the_flag() {
        let mut raster = Raster::new_fill(2, 2, RED);
        raster.set_visited(Point::new(1, 0), true).expect("in bounds");

        assert!(raster.is_visited(Point::new(1, 0)));
        assert_eq!(raster.get(Point::new(1, 0)).color, RED);
        assert_eq!(raster.count_visited(), 1);

        assert_eq!(
            raster.set_visited(Point::new(2, 0), true),
            Err(Error::OutOfBounds)
        );
        assert_eq!(raster.count_visited(), 1);
    }

    #[test]
    fn scan_orders_cover_every_position_once() {
        let raster = Raster::new_fill(3, 2, RED);

        let rows: Vec<_> = raster.positions_row_major().collect();
        let cols: Vec<_> = raster.positions_column_major().collect();

        assert_eq!(rows.len(), 6);
        assert_eq!(cols.len(), 6);
        assert_eq!(rows[1], Point::new(1, 0));
        assert_eq!(cols[1], Point::new(0, 1));
        for p in &rows {
            assert!(cols.contains(p));
        }
    }
}
