//! Everything on the DMX side of the conversion: the per-channel output state with its gain stage and the static
//! scene override.
//!
//! This crate stops at `(channel, value)` pairs handed to an observer; framing and timing on the DMX512 wire are left
//! to whatever transmitter the observer feeds.

mod channel;
pub use channel::*;

mod rgb;
pub use rgb::*;

mod scene;
pub use scene::*;
