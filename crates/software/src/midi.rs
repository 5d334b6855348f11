//! Everything on the MIDI side of the conversion: recovering Continuous Controller frames from a raw byte stream and
//! scaling them into the DMX range.

mod continuous_controller;
pub use continuous_controller::*;

mod reader;
pub use reader::*;
