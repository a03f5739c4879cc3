mod cage;
mod pixel_rect;

pub use cage::Cage;
pub use pixel_rect::PixelRect;
