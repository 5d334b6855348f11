//! Provides [`Midi2Dmx`], which ties reader, converter, output state and static scene together.

use crate::{
    configuration::{CycleConfig, OutputMode},
    dmx::{Dmx, OverrideScene, Rgb, RgbChannels},
    io::{SerialReader, Sleep},
    midi::MidiReader,
};
use wmidi::Channel;

/// Converts MIDI CC input from a serial line into DMX notifications.
///
/// Meant to be driven from a single poll loop. Every call does at most one unit of work and reports changes
/// synchronously through the observer passed to [`new`][Self::new]:
///
/// ```ignore
/// let mut midi2dmx = Midi2Dmx::new(Channel::Ch1, |ch, value| dmx_out.write(ch, value), uart, Delay(delay));
/// loop {
///     midi2dmx.gain_update(adc.read());
///     midi2dmx.update();
/// }
/// ```
#[derive(Debug)]
pub struct Midi2Dmx<R, S, F> {
    dmx: Dmx<F>,
    reader: MidiReader<R>,
    scene: OverrideScene<S>,
    mode: OutputMode,
}

impl<R, S, F> Midi2Dmx<R, S, F>
where
    R: SerialReader,
    S: Sleep,
    F: FnMut(u8, u8),
{
    /// Constructs a [`Midi2Dmx`] listening for Control Change messages on `channel`, in [`OutputMode::Live`].
    pub fn new(channel: Channel, on_change: F, serial: R, sleep: S) -> Self {
        Self {
            dmx: Dmx::with_callback(on_change),
            reader: MidiReader::new(channel, serial),
            scene: OverrideScene::new(sleep),
            mode: OutputMode::default(),
        }
    }

    /// Returns the DMX output state.
    pub fn dmx(&self) -> &Dmx<F> {
        &self.dmx
    }

    /// Returns the MIDI reader.
    pub fn reader(&self) -> &MidiReader<R> {
        &self.reader
    }

    /// Returns the static scene.
    pub fn scene(&self) -> &OverrideScene<S> {
        &self.scene
    }

    /// Returns the current [`OutputMode`].
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Selects the [`OutputMode`] used by [`update`][Self::update].
    pub fn set_mode(&mut self, mode: OutputMode) {
        if mode != self.mode {
            info!("Switching output mode to {}", mode);
        }
        self.mode = mode;
    }

    /// Advances to the next [`OutputMode`], e.g., on a button press. Returns the new mode.
    pub fn cycle_mode(&mut self) -> OutputMode {
        self.set_mode(self.mode.cycle());
        self.mode
    }

    /// Applies a new gain. See [`Dmx::update_gain`].
    pub fn gain_update(&mut self, gain: u16) {
        self.dmx.update_gain(gain);
    }

    /// Reads at most one Control Change frame from the serial line and applies it.
    ///
    /// Returns `true` if a frame was read, regardless of whether it changed the output.
    pub fn serial_update(&mut self) -> bool {
        match self.reader.read_cc() {
            Some(cc) => {
                self.dmx.update_cc(cc);
                true
            }
            None => false,
        }
    }

    /// Configures the static scene sent in [`OutputMode::StaticScene`].
    pub fn set_rgb_override(&mut self, channels: RgbChannels, rgb: Rgb) {
        self.scene.configure(channels, rgb);
    }

    /// Sends the static scene once and pauses. See [`OverrideScene::play`].
    pub fn override_update(&mut self) {
        self.scene.play(&mut self.dmx);
    }

    /// Does one unit of work for the current [`OutputMode`]: either a [`serial_update`][Self::serial_update] or an
    /// [`override_update`][Self::override_update].
    pub fn update(&mut self) {
        match self.mode {
            OutputMode::Live => {
                self.serial_update();
            }
            OutputMode::StaticScene => self.override_update(),
        }
    }
}
