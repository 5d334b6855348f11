//! This crate contains architecture-agnostic logic for midi2dmx, a device which lets a MIDI control surface drive
//! stage lighting by translating [MIDI](https://midi.org/midi-1-0) Continuous Controller (CC) messages received on a
//! serial line into [DMX](https://en.wikipedia.org/wiki/DMX512) channel values.
//!
//! Bytes flow through the crate in one direction:
//!
//! 1. [`MidiReader`][midi::MidiReader] synchronizes on the CC status byte of the configured MIDI channel and extracts
//!    one controller/value frame.
//! 2. [`to_dmx`][midi::to_dmx] scales the 7-bit MIDI value to the 8-bit DMX range.
//! 3. [`Dmx`][dmx::Dmx] latches the value, applies the gain and notifies the registered observer, but only if the
//!    output actually changed.
//!
//! Alternatively an [`OverrideScene`][dmx::OverrideScene] pushes a static RGB pattern through the same [`Dmx`][dmx::Dmx],
//! bypassing MIDI entirely. [`Midi2Dmx`] bundles all of the above behind a small poll-loop API.
//!
//! The serial port and the clock are not part of this crate; they are reached through the traits in [`io`].

#![deny(missing_docs)]
#![no_std]

#[cfg(test)]
extern crate std;

// must be declared first so the logging macros are visible to every other module
#[macro_use]
mod fmt;

pub mod configuration;
pub mod dmx;
pub mod io;
pub mod midi;

mod midi2dmx;
pub use midi2dmx::*;

mod value_pair;
pub use value_pair::*;
