//! Interactive viewers for walking the lantern through a sample room

pub mod gpu_viewer;
mod scene;
mod viewer;

pub use gpu_viewer::run_gpu_viewer;
pub use scene::{Action, SAMPLE_ROOM, Scene};
pub use viewer::InteractiveViewer;
