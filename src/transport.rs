/// Trait for pcProx reader communication backends.
/// Implement this trait for whatever holds the opened HID handle
/// (hidapi, a test double, etc.)
pub trait ProxTransport {
    /// Error type for transport operations
    type Error: std::fmt::Debug;

    /// Send a feature report. The first byte of `report` is the report
    /// number, which the pcProx expects to be 0x00.
    fn send_feature_report(&mut self, report: &[u8]) -> Result<(), Self::Error>;

    /// Read a feature report into `buf` and return the number of bytes
    /// placed there, including the leading report number byte.
    fn get_feature_report(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
