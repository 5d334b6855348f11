//! Provides [`OverrideScene`], which replaces the MIDI-driven output with a static RGB scene.

use super::{Dmx, Rgb, RgbChannels};
use crate::{ValuePair, io::Sleep};
use embassy_time::Duration;

/// How long to pause after each replay of the scene.
pub const SCENE_PAUSE: Duration = Duration::from_millis(1000);

/// A static scene: one [`Rgb`] colour written to every configured [`RgbChannel`][super::RgbChannel].
///
/// In override mode the scene is replayed at a fixed interval instead of forwarding converted MIDI input. Every write
/// is forced, so the scene goes out on the line even if a channel already holds the same value.
#[derive(Debug)]
pub struct OverrideScene<S> {
    channels: RgbChannels,
    rgb: Rgb,
    sleep: S,
}

impl<S: Sleep> OverrideScene<S> {
    /// Constructs an unconfigured [`OverrideScene`], which will not write anything until
    /// [configured][Self::configure].
    pub fn new(sleep: S) -> Self {
        Self {
            channels: RgbChannels::default(),
            rgb: Rgb::default(),
            sleep,
        }
    }

    /// Replaces both the channels and the colour of the scene.
    pub fn configure(&mut self, channels: RgbChannels, rgb: Rgb) {
        self.channels = channels;
        self.rgb = rgb;
    }

    /// Returns the configured channels.
    pub fn channels(&self) -> &RgbChannels {
        &self.channels
    }

    /// Returns the configured colour.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Returns a reference to the underlying [`Sleep`].
    pub fn sleep(&self) -> &S {
        &self.sleep
    }

    /// Writes the scene to `dmx`, then pauses for [`SCENE_PAUSE`].
    ///
    /// For each triple, red, green and blue are forced through in that order. The pause happens even if no channels
    /// are configured.
    pub fn play<F: FnMut(u8, u8)>(&mut self, dmx: &mut Dmx<F>) {
        info!(
            "Sending static scene {} to {} fixtures",
            self.rgb,
            self.channels.len()
        );
        for ch in self.channels.iter() {
            dmx.force_value(ValuePair::new(ch.red, self.rgb.red));
            dmx.force_value(ValuePair::new(ch.green, self.rgb.green));
            dmx.force_value(ValuePair::new(ch.blue, self.rgb.blue));
        }

        self.sleep.sleep(SCENE_PAUSE);
    }
}
