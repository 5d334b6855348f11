//! Provides [`MidiReader`], which recovers Continuous Controller frames from an unstructured serial byte stream.
//!
//! ```text
//! status byte   data byte 1   data byte 2
//! [0x80, 0xFF]  [0x00, 0x7F]  [0x00, 0x7F]
//!
//! status byte: 0xBn -> Control Change on channel n
//! ```
//!
//! The stream may start mid-message, drop bytes, or carry traffic for other channels and message types. The reader
//! skips everything up to the status byte it is listening for and then commits to exactly one frame.

use crate::{ValuePair, io::SerialReader};
use embassy_time::Duration;
use wmidi::{Channel, U7};

/// Status nibble of a Control Change message.
const CONTROL_CHANGE_STATUS: u8 = 0xb0;

/// Number of data bytes following a Control Change status byte.
const CC_DATA_BYTES: usize = 2;

/// How long to wait after the status byte for the data bytes to arrive. At 31 250 baud two bytes take 640µs on the wire.
pub const SETTLE_DELAY: Duration = Duration::from_millis(2);

/// Reasons a frame could not be extracted.
///
/// None of these are faults; a missed frame is routine on a serial line and is simply retried on the next poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// The input ran dry before the expected status byte showed up.
    NoSync,
    /// The status byte was found, but fewer than two data bytes followed it.
    Incomplete,
    /// A data byte had its most significant bit set. Carries the offending byte.
    InvalidDataByte(u8),
}

/// Reads Control Change frames for a single MIDI channel from a [`SerialReader`].
#[derive(Debug)]
pub struct MidiReader<R> {
    /// The status byte which marks the start of a frame of interest, i.e., `0xB0 | channel`.
    sync_byte: u8,
    serial: R,
}

impl<R: SerialReader> MidiReader<R> {
    /// Constructs a [`MidiReader`] filtering for Control Change messages on `channel`.
    pub fn new(channel: Channel, serial: R) -> Self {
        Self {
            sync_byte: CONTROL_CHANGE_STATUS | channel.index(),
            serial,
        }
    }

    /// Returns the status byte this reader synchronizes on.
    pub fn sync_byte(&self) -> u8 {
        self.sync_byte
    }

    /// Returns a reference to the underlying [`SerialReader`].
    pub fn serial(&self) -> &R {
        &self.serial
    }

    /// Returns a mutable reference to the underlying [`SerialReader`].
    pub fn serial_mut(&mut self) -> &mut R {
        &mut self.serial
    }

    /// Makes one attempt to read a Control Change frame, returning the `(controller, value)` pair on success.
    ///
    /// See [`try_read_cc`][Self::try_read_cc] for the details.
    pub fn read_cc(&mut self) -> Option<ValuePair> {
        self.try_read_cc().ok()
    }

    /// Makes one attempt to read a Control Change frame.
    ///
    /// Bytes are consumed until the status byte of the configured channel is found; if the input runs dry first,
    /// [`FrameError::NoSync`] is returned. Once synchronized, the reader waits [`SETTLE_DELAY`] and then requires two
    /// bytes to be available. Both are consumed, and both must be valid 7-bit data bytes.
    ///
    /// A failed frame is not retried within the same call, so the controller and value returned are never stitched
    /// together from two different messages.
    pub fn try_read_cc(&mut self) -> Result<ValuePair, FrameError> {
        self.sync()?;

        if self.serial.available() < CC_DATA_BYTES {
            debug!("Status byte {=u8:#x} not followed by a complete frame", self.sync_byte);
            return Err(FrameError::Incomplete);
        }

        // both bytes are taken off the line even if the first is invalid; the frame has been committed to
        let controller = self.read_data_byte();
        let value = self.read_data_byte();

        let cc = ValuePair::new(u8::from(controller?), u8::from(value?));
        trace!(
            "Received Control Change: controller {}, value {}",
            cc.channel(),
            cc.value()
        );
        Ok(cc)
    }

    /// Consumes bytes until the expected status byte is found.
    fn sync(&mut self) -> Result<(), FrameError> {
        while self.serial.available() > 0 {
            match self.serial.read() {
                Some(byte) if byte == self.sync_byte => {
                    trace!("Synchronized on status byte {=u8:#x}", byte);
                    self.serial.delay(SETTLE_DELAY);
                    return Ok(());
                }
                Some(byte) => trace!("Discarding byte {=u8:#x} while synchronizing", byte),
                None => break,
            }
        }
        Err(FrameError::NoSync)
    }

    fn read_data_byte(&mut self) -> Result<U7, FrameError> {
        let byte = self.serial.read().ok_or(FrameError::Incomplete)?;
        // data bytes never have the most significant bit set; a byte that does belongs to a status byte
        if byte & 0x80 != 0 {
            warn!("Invalid MIDI data byte {=u8:#x}", byte);
            return Err(FrameError::InvalidDataByte(byte));
        }
        Ok(U7::from_u8_lossy(byte))
    }
}
