//! ARINC 708 data word layout and assembly.
//!
//! A packet is a single 200-byte buffer: an 8-byte header of packed
//! sub-byte fields followed by 192 bytes holding 512 three-bit color codes.
//! The layout is byte-granular with explicit mask/shift accessors; nothing
//! here depends on host endianness or struct layout.

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::angle;
use crate::color;
use crate::consts::{BITS_PER_BIN, HEADER_LEN, PACKET_LEN, RANGE_BINS};
use crate::raster::Raster;
use crate::ray::ScanGeometry;

/// Static header configuration: a "normal operation, no faults" snapshot.
///
/// None of these fields are derived from runtime state; they are the canned
/// values a real transceiver would report in this emulation scenario. Field
/// widths follow the standard; values wider than their field are masked on
/// encode.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub label: u8,
    pub control_accept: u8,
    pub slave: u8,
    pub spare: u8,
    pub mode_annunciation: u8,
    pub faults: u8,
    pub stabilization: u8,
    pub operating_mode: u8,
    pub tilt: u8,
    pub gain: u8,
    pub range: u8,
    pub data_accept: u8,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            label: 0b1011_0100,
            control_accept: 0b11,
            slave: 0,
            spare: 0,
            mode_annunciation: 0,
            faults: 0,
            stabilization: 0,
            operating_mode: 0b100,
            tilt: 0b1,
            gain: 0,
            range: 0b100,
            data_accept: 0,
        }
    }
}

impl HeaderConfig {
    /// Encode the header template. The scan-angle fields in bytes 6 and 7
    /// are left zero; [`Packet::set_scan_angle`] fills them per packet.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[0] = self.label;

        // Bytes 1-4: one 32-bit control word, fields packed LSB first.
        let word = u32::from(self.control_accept & 0b11)
            | u32::from(self.slave & 0b1) << 2
            | u32::from(self.spare & 0b11) << 3
            | u32::from(self.mode_annunciation & 0x1F) << 5
            | u32::from(self.faults & 0x7F) << 10
            | u32::from(self.stabilization & 0b1) << 17
            | u32::from(self.operating_mode & 0b111) << 18
            | u32::from(self.tilt & 0x7F) << 21
            | u32::from(self.gain & 0x0F) << 28;
        header[1..5].copy_from_slice(&word.to_le_bytes());

        // Byte 5: gain high 2 bits, then 6 bits of range.
        header[5] = (self.gain >> 4 & 0b11) | (self.range & 0x3F) << 2;

        // Byte 6: spare bit, data accept, then the scan-angle low field.
        header[6] = (self.data_accept & 0b11) << 1;

        header
    }
}

/// One complete 200-byte ARINC 708 data word.
#[derive(Clone, Serialize, Deserialize)]
pub struct Packet {
    #[serde(with = "BigArray")]
    bytes: [u8; PACKET_LEN],
}

impl Packet {
    /// A fresh packet from the header template, payload all zero. The
    /// payload must start zeroed because bin writes OR bits in.
    pub fn from_header(header: &HeaderConfig) -> Self {
        let mut bytes = [0u8; PACKET_LEN];
        bytes[..HEADER_LEN].copy_from_slice(&header.encode());
        Self { bytes }
    }

    /// Write the split scan-angle code into its two header fields.
    pub fn set_scan_angle(&mut self, code: u16) {
        let (low5, high7) = angle::split(code);
        self.bytes[6] = self.bytes[6] & 0b0000_0111 | low5 << 3;
        self.bytes[7] = self.bytes[7] & 0b1000_0000 | high7;
    }

    /// Reassemble the scan-angle code from the header.
    pub fn scan_angle(&self) -> u16 {
        angle::reassemble(self.bytes[6] >> 3, self.bytes[7] & 0x7F)
    }

    /// OR a 3-bit color code into the payload for range bin `bin` (0-based).
    /// Bits land at offset `bin * 3`, least significant first, crossing byte
    /// boundaries as needed.
    pub fn set_color_code(&mut self, bin: usize, code: u8) {
        debug_assert!(bin < RANGE_BINS);
        let bitnum = bin * BITS_PER_BIN;
        for k in 0..BITS_PER_BIN {
            let offset = bitnum + k;
            let bit = code >> k & 1;
            self.bytes[HEADER_LEN + offset / 8] |= bit << (offset % 8);
        }
    }

    /// Read back the 3-bit color code for range bin `bin` (0-based).
    pub fn color_code(&self, bin: usize) -> u8 {
        debug_assert!(bin < RANGE_BINS);
        let bitnum = bin * BITS_PER_BIN;
        let mut code = 0;
        for k in 0..BITS_PER_BIN {
            let offset = bitnum + k;
            code |= (self.bytes[HEADER_LEN + offset / 8] >> (offset % 8) & 1) << k;
        }
        code
    }

    pub fn as_bytes(&self) -> &[u8; PACKET_LEN] {
        &self.bytes
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }
}

impl std::fmt::Debug for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packet")
            .field("label", &self.bytes[0])
            .field("scan_angle", &self.scan_angle())
            .finish()
    }
}

/// Assembles one packet per scan-angle code from a source raster.
pub struct PacketBuilder {
    header: HeaderConfig,
    geometry: ScanGeometry,
}

impl PacketBuilder {
    pub fn new(header: HeaderConfig, geometry: ScanGeometry) -> Self {
        Self { header, geometry }
    }

    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    /// Build the data word for one scan-angle code: decode the bearing,
    /// walk range bins 1..=512 along it, quantize each sampled pixel and
    /// pack it. Off-raster bins stay black.
    pub fn build(&self, code: u16, raster: &Raster) -> Packet {
        let mut packet = Packet::from_header(&self.header);
        packet.set_scan_angle(code);

        let bearing = angle::decode(code);
        for radius in 1..=RANGE_BINS as u16 {
            let Some((x, y)) = self.geometry.map(bearing, radius) else {
                continue;
            };
            let (r, g, b) = raster.pixel(x, y);
            packet.set_color_code(usize::from(radius) - 1, color::quantize(r, g, b));
        }

        packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn solid_raster(width: u32, height: u32, rgb: (u8, u8, u8)) -> Raster {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
        Raster::from_packed(width, height, pixels).unwrap()
    }

    #[test]
    fn default_header_template_bytes() {
        let header = HeaderConfig::default().encode();
        assert_eq!(header, [0xB4, 0x03, 0x00, 0x30, 0x00, 0x10, 0x00, 0x00]);
    }

    #[test]
    fn scan_angle_round_trips_through_header() {
        let mut packet = Packet::from_header(&HeaderConfig::default());
        for code in [0u16, 1, 0x1F, 0x20, 2048, 4095] {
            packet.set_scan_angle(code);
            assert_eq!(packet.scan_angle(), code);
        }
    }

    #[test]
    fn scan_angle_leaves_neighbor_fields_alone() {
        let header = HeaderConfig {
            data_accept: 0b11,
            ..HeaderConfig::default()
        };
        let mut packet = Packet::from_header(&header);
        packet.set_scan_angle(4095);
        assert_eq!(packet.as_bytes()[6] & 0b0000_0111, 0b110);
        assert_eq!(packet.as_bytes()[7] & 0b1000_0000, 0);
    }

    #[test]
    fn payload_codes_read_back_exactly() {
        let mut packet = Packet::from_header(&HeaderConfig::default());
        for bin in 0..RANGE_BINS {
            packet.set_color_code(bin, (bin % 8) as u8);
        }
        for bin in 0..RANGE_BINS {
            assert_eq!(packet.color_code(bin), (bin % 8) as u8, "bin {}", bin);
        }
    }

    #[test]
    fn solid_red_payload_closed_form() {
        let raster = solid_raster(64, 64, (255, 0, 0));
        let geometry = ScanGeometry::for_raster(&raster, 32, 32);
        let builder = PacketBuilder::new(HeaderConfig::default(), geometry);

        let packet = builder.build(0, &raster);
        // 512 copies of 0b110 packed LSB first repeat every three bytes.
        for chunk in packet.payload().chunks(3) {
            assert_eq!(chunk, [0xB6, 0x6D, 0xDB]);
        }
    }

    #[test]
    fn packet_is_always_full_length() {
        let raster = solid_raster(8, 8, (0, 255, 255));
        let geometry = ScanGeometry::for_raster(&raster, 4, 4);
        let builder = PacketBuilder::new(HeaderConfig::default(), geometry);
        let packet = builder.build(123, &raster);
        assert_eq!(packet.as_bytes().len(), PACKET_LEN);
        assert_eq!(packet.payload().len(), PAYLOAD_LEN);
    }

    #[test]
    fn builder_output_matches_independent_quantization() {
        // Quadrant raster: distinct colors per quadrant.
        let (w, h) = (32u32, 32u32);
        let mut pixels = Vec::new();
        for y in 0..h {
            for x in 0..w {
                let rgb: [u8; 3] = match (x < w / 2, y < h / 2) {
                    (true, true) => [255, 0, 0],
                    (false, true) => [0, 255, 0],
                    (true, false) => [255, 255, 0],
                    (false, false) => [255, 255, 255],
                };
                pixels.extend_from_slice(&rgb);
            }
        }
        let raster = Raster::from_packed(w, h, pixels).unwrap();
        let geometry = ScanGeometry::for_raster(&raster, 16, 16);
        let builder = PacketBuilder::new(HeaderConfig::default(), geometry);

        for code in [0u16, 511, 1024, 3000] {
            let packet = builder.build(code, &raster);
            let bearing = crate::angle::decode(code);
            for radius in 1..=RANGE_BINS as u16 {
                let expected = match geometry.map(bearing, radius) {
                    Some((x, y)) => {
                        let (r, g, b) = raster.pixel(x, y);
                        crate::color::quantize(r, g, b)
                    }
                    None => COLOR_BLACK,
                };
                assert_eq!(packet.color_code(usize::from(radius) - 1), expected);
            }
        }
    }
}
