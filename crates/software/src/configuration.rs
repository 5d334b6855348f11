//! This module contains the user-configurable settings of the converter and a trait to make cycling through them
//! from a pushbutton easy.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use wmidi::Channel;

/// A trait which allows infinite cycling of an enum's variants.
///
/// Useful for pushbutton user interfaces, allowing presses to advance from the current to the next variant,
/// cycling back to the beginning when all variants have been exhausted.
pub trait CycleConfig {
    /// Return the next variant, cycling back to the beginning as needed.
    fn cycle(self) -> Self
    where
        Self: FromPrimitive + ToPrimitive + Sized,
    {
        let index = self
            .to_u8()
            .expect("enum variants should be castable to u8");
        match <Self as FromPrimitive>::from_u8(index + 1) {
            Some(new_selection) => new_selection,
            None => FromPrimitive::from_u8(0).expect("enum should not be empty"),
        }
    }
}

/// Determines what drives the DMX output.
#[derive(Debug, Default, Copy, Clone, ToPrimitive, FromPrimitive, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputMode {
    /// MIDI Control Change messages are converted and forwarded as they arrive.
    #[default]
    Live,
    /// MIDI input is ignored; a static RGB scene is sent at a fixed interval instead. Handy as a fallback look when the
    /// control surface is disconnected.
    StaticScene,
}
impl CycleConfig for OutputMode {}

/// Returns the MIDI [`Channel`] encoded in the low nibble of `raw`; the high nibble is ignored.
///
/// Intended for hosts that read the channel from DIP switches or similar raw sources.
pub fn midi_channel(raw: u8) -> Channel {
    // the masked index is always within 0..=15, so the fallback is unreachable
    Channel::from_index(raw & 0x0f).unwrap_or(Channel::Ch1)
}
