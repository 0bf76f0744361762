pub mod clock;
pub mod draw_frame;
