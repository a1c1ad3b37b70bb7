//! Types for pcProx card read operations

use std::time::Duration;

use thiserror::Error;

/// Default wait for a card in single-shot mode.
pub const DEFAULT_SINGLE_SHOT_TIMEOUT: Duration = Duration::from_secs(3);

/// The first 8 bytes of a feature report as returned by the device.
/// Byte 0 carries the HID report number and is never decoded; the card
/// fields live at the same offsets the device puts them on the wire.
pub type ReplyBytes = [u8; 8];

/// A decoded card read: facility code and unique ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardReading {
    pub uid: u32,
    pub fac: u32,
}

/// How UID/FAC fields are extracted from 32-bit-format cards.
///
/// With `force_20_bit` set, cards reporting a 32-bit format keep the low
/// nibble of the UID's third byte (20-bit UID) and have their facility
/// code shifted down 4 bits. Cards reporting any other bit length are
/// unaffected by the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitWidthPolicy {
    pub force_20_bit: bool,
}

/// Polling mode for [`crate::ProxReader::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    /// Poll until the cancellation predicate fires.
    Continuous,
    /// Poll until one successful read or until `timeout` elapses.
    SingleShot { timeout: Duration },
}

impl Default for PollMode {
    fn default() -> Self {
        PollMode::Continuous
    }
}

/// Why the poll loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Single-shot mode read a card.
    Success,
    /// Single-shot mode ran out of time with no card read.
    TimedOut,
    /// Continuous mode was cancelled by the caller.
    UserCancelled,
}

/// Error from a single feature-report round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The read returned fewer than 8 usable payload bytes, or the
    /// underlying HID call failed.
    #[error("feature report read returned fewer than 8 usable bytes")]
    ShortRead,
}

/// Error from a single card read attempt.
#[derive(Debug, Error)]
pub enum ReadError {
    /// One of the two command exchanges got no valid reply.
    #[error("no reply from reader: {0}")]
    NoReply(#[from] TransportError),
}

/// Convert bytes to uppercase hex string
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
