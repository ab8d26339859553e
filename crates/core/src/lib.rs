pub mod category;
pub mod entry;
pub mod grouping;
pub mod window;

pub use category::*;
pub use entry::*;
pub use grouping::*;
pub use window::*;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
