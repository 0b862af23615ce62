pub mod breeding;
pub mod conversion;
pub mod effects;
pub mod progress;
pub mod sync;
