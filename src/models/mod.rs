/// Module coordinates
pub mod point;
/// Version, correction level and the encoded payload
pub mod qr_code;

pub use point::Position;
pub use qr_code::{ECLevel, QrCodeData, Version};
