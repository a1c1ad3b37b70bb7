//! USB HID transport using the hidapi crate

use crate::transport::ProxTransport;
use hidapi::{HidApi, HidDevice, HidError};
use log::info;

/// Transport over an opened hidapi device handle.
pub struct HidTransport {
    device: HidDevice,
}

impl HidTransport {
    /// RFIDeas vendor ID.
    pub const DEFAULT_VID: u16 = 0x0C27;
    /// pcProx 125kHz WAVE ID Solo product ID.
    pub const DEFAULT_PID: u16 = 0x3BFA;

    /// Open the first HID device matching the given vendor/product pair.
    pub fn open(vid: u16, pid: u16) -> Result<Self, HidError> {
        let api = HidApi::new()?;
        let device = api.open(vid, pid)?;

        if let Ok(Some(manufacturer)) = device.get_manufacturer_string() {
            info!("Manufacturer: {}", manufacturer);
        }
        if let Ok(Some(product)) = device.get_product_string() {
            info!("Product: {}", product);
        }
        if let Ok(Some(serial)) = device.get_serial_number_string() {
            info!("Serial number: {}", serial);
        }

        Ok(Self { device })
    }

    /// Open the stock RFIDeas WAVE ID Solo reader.
    pub fn open_default() -> Result<Self, HidError> {
        Self::open(Self::DEFAULT_VID, Self::DEFAULT_PID)
    }
}

impl ProxTransport for HidTransport {
    type Error = HidError;

    fn send_feature_report(&mut self, report: &[u8]) -> Result<(), Self::Error> {
        self.device.send_feature_report(report)
    }

    fn get_feature_report(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // hidapi reads the requested report number from the first byte.
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        self.device.get_feature_report(buf)
    }
}
