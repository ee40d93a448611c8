//! GPU presentation using wgpu
//!
//! Lighting is computed on the CPU into an indexed frame; the GPU only
//! scales the expanded RGBA result to the window.

pub mod context;
pub mod present;

pub use context::GpuContext;
pub use present::FramePresenter;
