//! Provides [`Dmx`], which holds the current DMX datum, attenuates it by a gain and reports changes to an observer.

use crate::{ValuePair, midi};

/// Bit resolution of the analog reading the gain is typically taken from.
pub const ANALOG_READ_BITS: u8 = 10;

/// Gain factor representing a multiplier of 1.0, i.e., no attenuation.
pub const UNITY_GAIN: u16 = 1 << ANALOG_READ_BITS;

/// Gain changes up to this size (in either direction) are ignored, so that ADC jitter doesn't flood the observer.
pub const GAIN_DEAD_ZONE: u16 = 1;

/// The output state of a DMX channel.
///
/// Holds the last applied [`ValuePair`] and a gain in `[0, UNITY_GAIN]`. The value reported to the observer is always
/// the [scaled value][Self::value_scaled]. The observer is only called when something actually changed (or an update
/// is forced), which keeps redundant traffic off the DMX line.
///
/// Without an observer all state changes still happen; there just isn't anyone to tell.
pub struct Dmx<F = fn(u8, u8)> {
    value: ValuePair,
    gain: u16,
    on_change: Option<F>,
}

impl Default for Dmx {
    fn default() -> Self {
        Self::new()
    }
}

impl Dmx {
    /// Constructs a [`Dmx`] without an observer.
    pub fn new() -> Self {
        Self {
            value: ValuePair::default(),
            gain: UNITY_GAIN,
            on_change: None,
        }
    }
}

impl<F: FnMut(u8, u8)> Dmx<F> {
    /// Constructs a [`Dmx`] which calls `on_change` with `(channel, scaled value)` whenever its output changes.
    pub fn with_callback(on_change: F) -> Self {
        Self {
            value: ValuePair::default(),
            gain: UNITY_GAIN,
            on_change: Some(on_change),
        }
    }

    /// Returns the last applied DMX pair, before gain.
    pub fn value(&self) -> ValuePair {
        self.value
    }

    /// Returns the current gain.
    pub fn gain(&self) -> u16 {
        self.gain
    }

    /// Returns the value of the last applied DMX pair attenuated by the current gain.
    ///
    /// Integer math only: `(value * gain) >> 10`, truncating.
    pub fn value_scaled(&self) -> u8 {
        let scaled = (u32::from(self.value.value()) * u32::from(self.gain)) >> ANALOG_READ_BITS;
        // value <= 255 and gain <= 1024, so the result always fits
        scaled as u8
    }

    /// Applies a new DMX pair, notifying the observer if it differs from the current one.
    pub fn update_value(&mut self, value: ValuePair) {
        self.apply_value(value, false);
    }

    /// Applies a new DMX pair and notifies the observer regardless of the current one.
    pub fn force_value(&mut self, value: ValuePair) {
        self.apply_value(value, true);
    }

    /// Converts a MIDI CC `(controller, value)` pair to DMX and [applies it][Self::update_value].
    pub fn update_cc(&mut self, cc: ValuePair) {
        self.update_value(midi::to_dmx(cc));
    }

    /// Applies a new gain, clipped to `[0, UNITY_GAIN]`.
    ///
    /// The gain only changes, and the observer is only notified, if the clipped gain lies more than
    /// [`GAIN_DEAD_ZONE`] away from the current one.
    pub fn update_gain(&mut self, gain: u16) {
        self.apply_gain(gain, false);
    }

    /// Applies a new gain, clipped to `[0, UNITY_GAIN]`, and notifies the observer regardless of the dead zone.
    pub fn force_gain(&mut self, gain: u16) {
        self.apply_gain(gain, true);
    }

    fn apply_value(&mut self, value: ValuePair, force: bool) {
        if value == self.value && !force {
            return;
        }
        self.value = value;
        self.notify();
    }

    fn apply_gain(&mut self, gain: u16, force: bool) {
        let gain = gain.min(UNITY_GAIN);
        if gain.abs_diff(self.gain) <= GAIN_DEAD_ZONE && !force {
            trace!("Gain {} within dead zone of {}", gain, self.gain);
            return;
        }
        self.gain = gain;
        self.notify();
    }

    fn notify(&mut self) {
        let channel = self.value.channel();
        let scaled = self.value_scaled();
        if let Some(on_change) = self.on_change.as_mut() {
            debug!("DMX channel {} -> {}", channel, scaled);
            on_change(channel, scaled);
        }
    }
}

impl<F> core::fmt::Debug for Dmx<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dmx")
            .field("value", &self.value)
            .field("gain", &self.gain)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl<F> defmt::Format for Dmx<F> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Dmx {{ value: {}, gain: {}, on_change: {} }}",
            self.value,
            self.gain,
            self.on_change.is_some()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mock::Recorder;
    use std::vec;

    fn dut() -> (Dmx<impl FnMut(u8, u8)>, Recorder) {
        let recorder = Recorder::default();
        (Dmx::with_callback(recorder.observer()), recorder)
    }

    #[test]
    fn new() {
        let dmx = Dmx::new();
        assert_eq!(ValuePair::new(0, 0), dmx.value(), "Expected left but got right");
        assert_eq!(UNITY_GAIN, dmx.gain(), "Expected left but got right");
        assert_eq!(1024, UNITY_GAIN, "Expected left but got right");
    }

    #[test]
    fn update_value_notifies() {
        let (mut dmx, recorder) = dut();
        dmx.update_value(ValuePair::new(5, 200));
        assert_eq!(vec![(5, 200)], recorder.calls(), "Expected left but got right");
        assert_eq!(ValuePair::new(5, 200), dmx.value(), "Expected left but got right");
    }

    #[test]
    fn identical_value_is_suppressed() {
        let (mut dmx, recorder) = dut();
        dmx.update_value(ValuePair::new(5, 200));
        dmx.update_value(ValuePair::new(5, 200));
        assert_eq!(vec![(5, 200)], recorder.calls(), "Expected left but got right");
    }

    #[test]
    fn initial_value_is_suppressed() {
        let (mut dmx, recorder) = dut();
        dmx.update_value(ValuePair::default());
        assert!(recorder.calls().is_empty(), "Should not notify for an unchanged value");
    }

    #[test]
    fn channel_change_notifies() {
        let (mut dmx, recorder) = dut();
        dmx.update_value(ValuePair::new(5, 200));
        dmx.update_value(ValuePair::new(6, 200));
        assert_eq!(
            vec![(5, 200), (6, 200)],
            recorder.calls(),
            "Expected left but got right"
        );
    }

    #[test]
    fn forced_value_always_notifies() {
        let (mut dmx, recorder) = dut();
        dmx.force_value(ValuePair::new(5, 200));
        dmx.force_value(ValuePair::new(5, 200));
        dmx.force_value(ValuePair::default());
        assert_eq!(
            vec![(5, 200), (5, 200), (0, 0)],
            recorder.calls(),
            "Expected left but got right"
        );
    }

    #[test]
    fn update_cc_converts() {
        let (mut dmx, recorder) = dut();
        dmx.update_cc(ValuePair::new(1, 2));
        assert_eq!(vec![(1, 4)], recorder.calls(), "Expected left but got right");
        assert_eq!(ValuePair::new(1, 4), dmx.value(), "Expected left but got right");
    }

    #[test]
    fn forced_gain_scales() {
        for gain in [0, 1, UNITY_GAIN - 1, UNITY_GAIN, UNITY_GAIN + 1] {
            let (mut dmx, recorder) = dut();
            dmx.update_value(ValuePair::new(0, 255));
            dmx.force_gain(gain);

            let expected = (255 * u32::from(gain.min(UNITY_GAIN)) / u32::from(UNITY_GAIN)) as u8;
            assert_eq!(
                vec![(0, 255), (0, expected)],
                recorder.calls(),
                "gain {gain}"
            );
        }
    }

    #[test]
    fn gain_is_clipped() {
        for gain in [UNITY_GAIN + 1, 2000, u16::MAX] {
            let mut dmx = Dmx::new();
            dmx.force_gain(0);
            dmx.update_gain(gain);
            assert_eq!(UNITY_GAIN, dmx.gain(), "Expected left but got right");
        }
    }

    #[test]
    fn gain_dead_zone() {
        const GAIN_INIT: u16 = UNITY_GAIN >> 1;
        const VALUE: u8 = 126 << 1;

        for gain in [0, 1, 509, 510, 511, 512, 513, 514, 515, 1023, 1024] {
            let (mut dmx, recorder) = dut();
            dmx.update_value(ValuePair::new(0, VALUE));
            dmx.update_gain(GAIN_INIT);
            recorder.clear();

            dmx.update_gain(gain);

            if gain.abs_diff(GAIN_INIT) > 1 {
                let expected = ((u32::from(VALUE) * u32::from(gain)) >> 10) as u8;
                assert_eq!(vec![(0, expected)], recorder.calls(), "gain {gain}");
                assert_eq!(gain, dmx.gain(), "gain {gain}");
            } else {
                assert!(recorder.calls().is_empty(), "gain {gain} should be ignored");
                assert_eq!(GAIN_INIT, dmx.gain(), "gain {gain}");
            }
        }
    }

    #[test]
    fn forced_gain_ignores_dead_zone() {
        let (mut dmx, recorder) = dut();
        dmx.update_value(ValuePair::new(3, 100));
        dmx.force_gain(UNITY_GAIN);
        assert_eq!(
            vec![(3, 100), (3, 100)],
            recorder.calls(),
            "Expected left but got right"
        );
    }

    #[test]
    fn scaling_truncates() {
        let mut dmx = Dmx::new();
        dmx.update_value(ValuePair::new(0, 3));
        dmx.update_gain(UNITY_GAIN >> 1);
        // 3 * 512 / 1024 = 1.5
        assert_eq!(1, dmx.value_scaled(), "Expected left but got right");
    }

    #[test]
    fn scaled_value_follows_new_data() {
        let (mut dmx, recorder) = dut();
        dmx.update_gain(UNITY_GAIN >> 2);
        dmx.update_value(ValuePair::new(9, 200));
        assert_eq!(
            vec![(0, 0), (9, 50)],
            recorder.calls(),
            "Expected left but got right"
        );
    }

    #[test]
    fn without_observer_state_still_changes() {
        let mut dmx = Dmx::new();
        dmx.update_value(ValuePair::new(4, 40));
        dmx.update_gain(100);
        assert_eq!(ValuePair::new(4, 40), dmx.value(), "Expected left but got right");
        assert_eq!(100, dmx.gain(), "Expected left but got right");
        assert_eq!(3, dmx.value_scaled(), "Expected left but got right");
    }
}
