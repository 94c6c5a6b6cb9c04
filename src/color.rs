//! RGB to ARINC 708 color reduction.

use crate::consts::RGB_TO_ARINC;

/// Quantize an 8-bit RGB pixel to a 3-bit ARINC 708 color code.
///
/// Each channel is thresholded at half scale, the three threshold bits are
/// packed as `b | g << 1 | r << 2` and mapped through the standard's table.
pub fn quantize(r: u8, g: u8, b: u8) -> u8 {
    let index = (b / 128) | (g / 128) << 1 | (r / 128) << 2;
    RGB_TO_ARINC[index as usize]
}

/// Posterize one channel to full intensity or zero.
///
/// Diagnostic only: used to render a human-viewable preview of what the
/// quantizer saw. Not part of the wire contract.
pub fn posterize_channel(value: u8) -> u8 {
    (value / 128) * 255
}
