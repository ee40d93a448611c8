//! Radial light bands with wall occlusion
//!
//! A `LightProfile` owns the precomputed `DistanceTable` for one ring count,
//! band width and core radius. `apply` rasterizes it onto a palette-indexed
//! surface once per frame.

mod jitter;
mod occlusion;
mod raster;
mod table;

pub use jitter::Jitter;
pub use occlusion::{Occluder, RowLimits};
pub use raster::apply;
pub use table::DistanceTable;

/// Immutable light shape. Reach is `center_radius + rings * band_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightProfile {
    rings: u16,
    band_width: u16,
    center_radius: u16,
    table: DistanceTable,
}

impl LightProfile {
    /// Panics if `rings` or `band_width` is zero.
    pub fn new(rings: u16, band_width: u16, center_radius: u16) -> Self {
        LightProfile {
            rings,
            band_width,
            center_radius,
            table: DistanceTable::build(rings, band_width, center_radius),
        }
    }

    /// Profiles one pixel smaller, equal and larger in core radius, used to
    /// make the light breathe.
    pub fn breathing_set(rings: u16, band_width: u16, center_radius: u16) -> Vec<LightProfile> {
        vec![
            LightProfile::new(rings, band_width, center_radius.saturating_sub(1)),
            LightProfile::new(rings, band_width, center_radius),
            LightProfile::new(rings, band_width, center_radius.saturating_add(1)),
        ]
    }

    pub fn rings(&self) -> u16 {
        self.rings
    }

    pub fn band_width(&self) -> u16 {
        self.band_width
    }

    pub fn center_radius(&self) -> u16 {
        self.center_radius
    }

    pub fn reach(&self) -> i32 {
        self.table.reach() as i32
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach() {
        assert_eq!(LightProfile::new(4, 13, 1).reach(), 53);
        assert_eq!(LightProfile::new(1, 1, 0).reach(), 1);
    }

    #[test]
    fn test_breathing_set_spans_radius() {
        let set = LightProfile::breathing_set(4, 13, 1);
        let radii: Vec<u16> = set.iter().map(|p| p.center_radius()).collect();
        assert_eq!(radii, vec![0, 1, 2]);
        assert_eq!(set[2].reach(), 54);

        // Saturates at zero instead of wrapping
        let set = LightProfile::breathing_set(2, 4, 0);
        assert_eq!(set[0].center_radius(), 0);
    }
}
