#[allow(clippy::module_inception)]
pub mod draw_frame;
pub mod overlays;
pub mod ports;
