//! Provides [`ValuePair`], the `(channel, value)` datum shared by the MIDI and DMX halves of the crate.

/// An immutable `(channel, value)` pair.
///
/// The same shape serves two domains. Coming out of the [`MidiReader`][crate::midi::MidiReader] the channel holds the
/// CC controller number and the value the 7-bit controller value; after [`to_dmx`][crate::midi::to_dmx] the channel
/// is a DMX channel and the value an 8-bit DMX level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValuePair {
    channel: u8,
    value: u8,
}

impl ValuePair {
    /// Constructs a [`ValuePair`].
    pub const fn new(channel: u8, value: u8) -> Self {
        Self { channel, value }
    }

    /// Returns the channel (or, for a MIDI CC pair, the controller number).
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Returns the value.
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl From<(u8, u8)> for ValuePair {
    fn from((channel, value): (u8, u8)) -> Self {
        Self::new(channel, value)
    }
}
