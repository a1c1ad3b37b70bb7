//! Driver for RFIDeas pcProx 125kHz HID card readers.
//!
//! The pcProx enumerates as a HID keyboard but is driven here through a
//! private request/response protocol over HID feature reports, decoding
//! each card read into a facility code (FAC) and unique ID (UID).
//!
//! # Features
//!
//! - `hidapi` - USB HID transport using the hidapi crate
//!
//! # Example
//!
//! ```ignore
//! use pcprox::{BitWidthPolicy, HidTransport, ProxReader};
//!
//! let transport = HidTransport::open_default()?;
//! let mut reader = ProxReader::new(transport, BitWidthPolicy::default());
//!
//! if let Some(card) = reader.read_once()? {
//!     println!("FAC={} UID={}", card.fac, card.uid);
//! }
//! ```

mod decode;
mod reader;
mod transport;
mod types;

#[cfg(feature = "hidapi")]
mod hid;

// Re-exports
pub use decode::decode;
pub use reader::ProxReader;
pub use transport::ProxTransport;
pub use types::{
    BitWidthPolicy, CardReading, ExitReason, PollMode, ReadError, ReplyBytes, TransportError,
    DEFAULT_SINGLE_SHOT_TIMEOUT,
};

#[cfg(feature = "hidapi")]
pub use hid::HidTransport;
