//! This module provides traits for the collaborators the core relies on but does not implement: the serial port the
//! MIDI bytes arrive on and the clock used to pace output.
//!
//! Both are consumed from a single control loop; none of the methods are expected to be reentrant.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// A byte-oriented serial input, such as a UART receiving MIDI at 31 250 baud.
pub trait SerialReader {
    /// Returns the number of bytes waiting in the input buffer.
    fn available(&mut self) -> usize;

    /// Takes the next byte from the input buffer, or `None` if the buffer is empty.
    fn read(&mut self) -> Option<u8>;

    /// Blocks the caller for the given time, giving the line a chance to deliver more bytes.
    fn delay(&mut self, duration: Duration);
}

/// A blocking pause of the calling context.
pub trait Sleep {
    /// Blocks the caller for the given time.
    fn sleep(&mut self, duration: Duration);
}

/// Adapts any [`DelayNs`] implementation (i.e., whatever the HAL of the target board provides) into a [`Sleep`].
#[derive(Debug)]
pub struct Delay<D>(pub D);

impl<D: DelayNs> Sleep for Delay<D> {
    fn sleep(&mut self, duration: Duration) {
        // DelayNs takes a u32, so very long pauses are issued in chunks
        let mut remaining = duration.as_micros();
        while remaining > 0 {
            let chunk = remaining.min(u64::from(u32::MAX));
            self.0.delay_us(chunk as u32);
            remaining -= chunk;
        }
    }
}
