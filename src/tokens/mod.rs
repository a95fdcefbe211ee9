//! Raw design tokens behind the class-based presets.
//!
//! The resolver deals in utility class strings; these constants expose the
//! underlying palette, spacing scale, type scale and motion values for code
//! that styles things directly.

pub mod animation;
pub mod color;
pub mod spacing;
pub mod typography;

pub use animation::*;
pub use color::*;
pub use spacing::*;
pub use typography::*;
