//! Precomputed band crossings for one quadrant of a light.
//!
//! Row `y` of the table holds, for each band, the horizontal offset where the
//! band's outer circle crosses that row. The quadrant is mirrored in x and y
//! at draw time.

/// Flat `(row, band) -> offset` table, row-major: index = y * rings + band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rings: usize,
    reach: usize,
    offsets: Vec<u16>,
    // Crossing of the fully-lit core circle, one per row
    lit: Vec<u16>,
}

/// Truncated `sqrt(radius² - y²)`, or 0 when the row misses the circle.
#[inline]
fn crossing(radius: i64, y: i64) -> u16 {
    let arg = radius * radius - y * y;
    if arg <= 0 { 0 } else { arg.isqrt() as u16 }
}

impl DistanceTable {
    /// Largest reach whose crossings fit the `u16` entries.
    pub const MAX_REACH: usize = u16::MAX as usize;

    /// `center_radius + rings * band_width`, without overflow.
    pub fn reach_for(rings: u16, band_width: u16, center_radius: u16) -> usize {
        center_radius as usize + rings as usize * band_width as usize
    }

    /// Build the table for `rings` bands of `band_width` pixels around a
    /// fully-lit core of `center_radius` pixels.
    ///
    /// Panics if `rings` or `band_width` is zero, or the reach exceeds
    /// [`Self::MAX_REACH`].
    pub fn build(rings: u16, band_width: u16, center_radius: u16) -> Self {
        assert!(rings >= 1, "a light needs at least one band");
        assert!(band_width >= 1, "band width must be at least one pixel");
        let reach = Self::reach_for(rings, band_width, center_radius);
        assert!(
            reach <= Self::MAX_REACH,
            "light reach {} exceeds {}",
            reach,
            Self::MAX_REACH
        );

        let rings = rings as usize;
        let mut offsets = vec![0u16; reach * rings];
        let mut lit = vec![0u16; reach];

        for y in 0..reach {
            let yi = y as i64;
            lit[y] = crossing(center_radius as i64, yi);
            for band in 0..rings {
                let radius = center_radius as i64 + band_width as i64 * (band as i64 + 1);
                offsets[y * rings + band] = crossing(radius, yi);
            }
        }

        DistanceTable { rings, reach, offsets, lit }
    }

    pub fn rings(&self) -> usize {
        self.rings
    }

    pub fn reach(&self) -> usize {
        self.reach
    }

    /// All band edges for row `y`, innermost first
    #[inline]
    pub fn row(&self, y: usize) -> &[u16] {
        &self.offsets[y * self.rings..(y + 1) * self.rings]
    }

    /// Edge of the fully-lit core on row `y`
    #[inline]
    pub fn lit_edge(&self, y: usize) -> u16 {
        self.lit[y]
    }
}
