use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

use crate::decode::decode;
use crate::transport::ProxTransport;
use crate::types::{
    bytes_to_hex, BitWidthPolicy, CardReading, ExitReason, PollMode, ReadError, ReplyBytes,
    TransportError,
};

/// A session with one opened pcProx reader.
///
/// Owns the transport handle and the bit-width policy for its whole
/// lifetime; all HID traffic for the device goes through this value.
pub struct ProxReader<T: ProxTransport> {
    transport: T,
    policy: BitWidthPolicy,
}

impl<T: ProxTransport> ProxReader<T> {
    // Command opcodes. The device only populates the info report after a
    // data report request, so READ_TAG_DATA must always go first.
    const READ_TAG_DATA: u8 = 0x8F;
    const READ_TAG_INFO: u8 = 0x8E;

    /// Commands and replies are 9-byte feature reports: report number,
    /// then 8 payload bytes.
    const REPORT_LEN: usize = 9;

    /// The device needs a short pause after every send before it will
    /// answer further operations.
    const SETTLE_DELAY: Duration = Duration::from_millis(1);

    /// Fixed wait between poll iterations.
    const POLL_INTERVAL: Duration = Duration::from_millis(500);

    /// Create a new reader session over the given transport
    pub fn new(transport: T, policy: BitWidthPolicy) -> Self {
        Self { transport, policy }
    }

    /// Attempt one card read.
    ///
    /// Issues the data command, then the info command, strictly in that
    /// order. Returns `Ok(None)` when no card is on the reader, which is
    /// the normal idle outcome. A failed exchange in either phase aborts
    /// the attempt with [`ReadError::NoReply`]; the info command is never
    /// sent after a data-phase failure.
    pub fn read_once(&mut self) -> Result<Option<CardReading>, ReadError> {
        let data = self.exchange(Self::READ_TAG_DATA)?;
        let info = self.exchange(Self::READ_TAG_INFO)?;

        // A card is present only if the three UID-contributing bytes sum
        // to something nonzero.
        if u16::from(data[1]) + u16::from(data[2]) + u16::from(data[3]) == 0 {
            return Ok(None);
        }

        let bit_length = info[1];
        info!("TAG DATA: {}", bytes_to_hex(&data));
        info!("TAG INFO: {}", bytes_to_hex(&info));
        info!("Card has {} data bits", bit_length);

        let reading = decode(data, info, self.policy);
        info!("FAC={} UID={}", reading.fac, reading.uid);

        Ok(Some(reading))
    }

    /// Poll the reader until the mode says to stop.
    ///
    /// Every decoded reading is handed to `on_reading`; consecutive reads
    /// of the same physical card are reported every iteration, with no
    /// de-duplication. Transport errors are logged and polling continues.
    ///
    /// In [`PollMode::SingleShot`] the loop ends at the first successful
    /// read or when `timeout` elapses, whichever comes first. The timeout
    /// is checked between iterations, so an attempt already in progress
    /// runs to completion. In [`PollMode::Continuous`] the loop ends when
    /// `cancelled` returns true; the predicate is polled once per
    /// iteration after the inter-poll sleep.
    pub fn run<C, F>(&mut self, mode: PollMode, mut cancelled: C, mut on_reading: F) -> ExitReason
    where
        C: FnMut() -> bool,
        F: FnMut(CardReading),
    {
        let start = Instant::now();

        loop {
            match self.read_once() {
                Ok(Some(reading)) => {
                    on_reading(reading);
                    if matches!(mode, PollMode::SingleShot { .. }) {
                        return ExitReason::Success;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Card read failed: {}", e);
                }
            }

            if let PollMode::SingleShot { timeout } = mode {
                if start.elapsed() > timeout {
                    return ExitReason::TimedOut;
                }
            }

            std::thread::sleep(Self::POLL_INTERVAL);

            if matches!(mode, PollMode::Continuous) && cancelled() {
                return ExitReason::UserCancelled;
            }
        }
    }

    /// One command round trip: send a 9-byte feature report carrying the
    /// opcode, pause for the device to settle, then read one feature
    /// report back. No retries; a failure aborts the current attempt.
    fn exchange(&mut self, opcode: u8) -> Result<ReplyBytes, TransportError> {
        let mut cmd = [0u8; Self::REPORT_LEN];
        cmd[1] = opcode;

        debug!("USB TX: {:02X?}", cmd);
        self.transport.send_feature_report(&cmd).map_err(|e| {
            error!("Failed to send feature report: {:?}", e);
            TransportError::ShortRead
        })?;
        std::thread::sleep(Self::SETTLE_DELAY);

        let mut report = [0u8; Self::REPORT_LEN];
        let received = self.transport.get_feature_report(&mut report).map_err(|e| {
            error!("Failed to read feature report: {:?}", e);
            TransportError::ShortRead
        })?;
        debug!("USB RX: {:02X?} ({} bytes)", &report[..received.min(report.len())], received);

        if received < Self::REPORT_LEN {
            return Err(TransportError::ShortRead);
        }

        let mut reply = [0u8; 8];
        reply.copy_from_slice(&report[..8]);
        Ok(reply)
    }
}
