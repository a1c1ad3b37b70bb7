//! UID/FAC field extraction from raw pcProx replies.

use crate::types::{BitWidthPolicy, CardReading, ReplyBytes};

/// Decode a card reading from the raw data (0x8F) and info (0x8E) replies.
///
/// The UID is assembled little-endian from data bytes 1..=3 and the
/// facility code from data bytes 3..=4; byte 3 is shared between the two
/// fields, which is how the device packs them. `info[1]` is the card's
/// reported bit length.
///
/// Pure function: no I/O, same inputs always give the same reading.
pub fn decode(data: ReplyBytes, info: ReplyBytes, policy: BitWidthPolicy) -> CardReading {
    let bit_length = info[1];

    let mut uid =
        u32::from(data[1]) | (u32::from(data[2]) << 8) | (u32::from(data[3]) << 16);
    let mut fac = u32::from(data[3]) | (u32::from(data[4]) << 8);

    if policy.force_20_bit && bit_length == 32 {
        // 32-bit format: keep only the low nibble of the UID's third byte
        // and realign the facility code, which sits 4 bits high.
        uid = (uid & 0x0000_FFFF) | (u32::from(data[3] & 0x0F) << 16);
        fac >>= 4;
    } else {
        // Everything else reads as a 16-bit UID with the FAC already
        // aligned. A 32-bit card read without the policy flag truncates
        // to 16 bits; that is the device's documented behavior.
        uid &= 0x0000_FFFF;
    }

    CardReading { uid, fac }
}
