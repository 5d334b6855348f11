//! Provides the conversion of a MIDI Continuous Controller (CC) pair into a DMX pair.
//!
//! MIDI CC messages consist of a status byte followed by two data bytes, the controller number and its value, each
//! in the range `[0x00, 0x7F]`. DMX addresses channels with 8-bit values. The controller number is used as the DMX
//! channel as-is, while the value is doubled so that the full CC travel covers `[0, 254]`.

use crate::ValuePair;

/// Scaling factor converting a 7-bit MIDI value into an 8-bit DMX value.
pub const MIDI_TO_DMX_FACTOR: u8 = 2;

/// The largest value a MIDI data byte can carry.
pub const MAX_MIDI_VALUE: u8 = 0x7f;

/// Converts a MIDI CC `(controller, value)` pair into a DMX `(channel, value)` pair.
///
/// The value is computed as `min(value * 2, 255)`. Values received off the wire never exceed `0x7F`, so saturation only
/// ever kicks in for callers that hand in out-of-range data.
pub fn to_dmx(cc: ValuePair) -> ValuePair {
    ValuePair::new(cc.channel(), cc.value().saturating_mul(MIDI_TO_DMX_FACTOR))
}
