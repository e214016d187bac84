pub mod atomic;
pub mod jpeg;
pub mod png;
pub mod svg;

pub use atomic::write_atomic;
