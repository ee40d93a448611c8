//! Palette-indexed colour remapping
//!
//! The screen holds 16 palette indices per pixel. Lighting never blends; it
//! swaps each index for a darker one through a per-band remap buffer.

use crate::error::LanternError;

/// Palette index used for everything outside the light and for shadows.
pub const DARKEST: u8 = 15;

/// Number of entries in the indexed palette.
pub const PALETTE_SIZE: usize = 16;

/// Display colours for each palette index (0xRRGGBB).
pub const ARCADE_COLORS: [u32; PALETTE_SIZE] = [
    0x000000, // 0 transparent
    0xffffff, // 1 white
    0xff2121, // 2 red
    0xff93c4, // 3 pink
    0xff8135, // 4 orange
    0xfff609, // 5 yellow
    0x249ca3, // 6 teal
    0x78dc52, // 7 green
    0x003fad, // 8 blue
    0x87f2ff, // 9 light blue
    0x8e2ec4, // 10 purple
    0xa4839f, // 11 light purple
    0x5c406c, // 12 dark purple
    0xe5cdc4, // 13 tan
    0x91463d, // 14 brown
    0x000000, // 15 black
];

/// Built-in ramp: lightest level first, darkest last.
const ARCADE_RAMP: &str = "
    0dabe486c6ccfecf
    0bcccec8f8fffcff
    0cfffcffffffffff
    0fffffffffffffff
";

/// Maps every palette index to its darkened equivalent for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapBuffer([u8; PALETTE_SIZE]);

impl RemapBuffer {
    pub const fn new(entries: [u8; PALETTE_SIZE]) -> Self {
        RemapBuffer(entries)
    }

    #[inline]
    pub fn map(&self, index: u8) -> u8 {
        self.0[(index as usize) & (PALETTE_SIZE - 1)]
    }
}

/// Ordered band remaps, darkest last. Built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRamp {
    levels: Vec<RemapBuffer>,
}

impl PaletteRamp {
    /// The default four-level ramp for the arcade palette.
    pub fn arcade() -> Result<Self, LanternError> {
        Self::from_image(ARCADE_RAMP)
    }

    /// Parse a remap image: one row per level, 16 hex digits per row.
    pub fn from_image(text: &str) -> Result<Self, LanternError> {
        let mut levels = Vec::new();

        for (row, line) in text.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let digits: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if digits.len() != PALETTE_SIZE {
                return Err(LanternError::MalformedRamp {
                    row,
                    reason: format!("expected {} digits, found {}", PALETTE_SIZE, digits.len()),
                });
            }

            let mut entries = [0u8; PALETTE_SIZE];
            for (slot, c) in entries.iter_mut().zip(&digits) {
                *slot = c.to_digit(16).ok_or_else(|| LanternError::MalformedRamp {
                    row,
                    reason: format!("'{}' is not a hex digit", c),
                })? as u8;
            }
            levels.push(RemapBuffer::new(entries));
        }

        if levels.is_empty() {
            return Err(LanternError::MalformedRamp {
                row: 0,
                reason: "image has no rows".to_string(),
            });
        }

        Ok(PaletteRamp { levels })
    }

    /// Remap for 1-based `band`. Bands past the last level reuse the darkest.
    #[inline]
    pub fn level(&self, band: usize) -> &RemapBuffer {
        let i = band.saturating_sub(1).min(self.levels.len() - 1);
        &self.levels[i]
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcade_ramp_parses() {
        let ramp = PaletteRamp::arcade().unwrap();
        assert_eq!(ramp.len(), 4);
        // Black stays black at every level
        for band in 1..=4 {
            assert_eq!(ramp.level(band).map(DARKEST), DARKEST);
        }
        // Darkest level collapses everything but transparency
        assert_eq!(ramp.level(4).map(1), DARKEST);
        assert_eq!(ramp.level(1).map(1), 0xd);
    }

    #[test]
    fn test_level_clamps_past_darkest() {
        let ramp = PaletteRamp::arcade().unwrap();
        assert_eq!(ramp.level(9), ramp.level(4));
        assert_eq!(ramp.level(0), ramp.level(1));
    }

    #[test]
    fn test_malformed_images() {
        assert!(matches!(
            PaletteRamp::from_image("0123"),
            Err(LanternError::MalformedRamp { row: 0, .. })
        ));
        assert!(matches!(
            PaletteRamp::from_image("0123456789abcdef\n0123456789abcdeg"),
            Err(LanternError::MalformedRamp { row: 1, .. })
        ));
        assert!(PaletteRamp::from_image("  \n\n").is_err());
    }
}
