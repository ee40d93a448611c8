//! Screen-wide background effects driven by the host's frame and timer callbacks.

mod lantern;

pub use lantern::LanternEffect;

use crate::host::{Camera, Point, Surface, TileGrid};

/// Capability shared by every background effect.
///
/// Hosts call `render` from the frame callback and `tick` from a fixed-interval
/// timer. Both are no-ops while the effect is stopped.
pub trait BackgroundEffect {
    fn start(&mut self, anchor: Point);

    fn stop(&mut self);

    /// Move the effect's anchor in world space
    fn set_anchor(&mut self, anchor: Point);

    fn is_running(&self) -> bool;

    fn render(&mut self, camera: &Camera, tiles: Option<&dyn TileGrid>, surface: &mut dyn Surface);

    fn tick(&mut self);
}
