mod block;
pub use block::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Algorithms to fit text into fixed page regions
pub mod layout;

mod rect;
pub use rect::*;

mod source;
pub use source::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;
