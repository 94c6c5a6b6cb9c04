//! Constants used by ARINC 708 data structures and calculations.

/// Number of scan-angle codes in one antenna revolution.
pub const SCAN_ANGLES_PER_REV: u16 = 4096;

/// Number of range bins (ray samples) in one data word.
pub const RANGE_BINS: usize = 512;

/// Length of one ARINC 708 data word in bytes.
pub const PACKET_LEN: usize = 200;

/// Length of the packed header in bytes.
pub const HEADER_LEN: usize = 8;

/// Length of the reflectivity payload in bytes (512 bins at 3 bits each).
pub const PAYLOAD_LEN: usize = PACKET_LEN - HEADER_LEN;

/// Bits per range-bin color code.
pub const BITS_PER_BIN: usize = 3;

/// Degrees-per-bit weights for the 12-bit scan angle field, bit 0 first.
pub const SCAN_ANGLE_WEIGHT_DEGREES: [f64; 12] = [
    0.0879, 0.1758, 0.3516, 0.7031, 1.4062, 2.8125, 5.625, 11.25, 22.5, 45.0, 90.0, 180.0,
];

/// Reference-angle offset subtracted from the decoded scan angle, in degrees.
pub const SCAN_ANGLE_REFERENCE_OFFSET_DEGREES: f64 = 90.0;

/// ARINC 708 color codes, indexed by the 3-bit RGB threshold value
/// `b | g << 1 | r << 2`. Blue has no code of its own and aliases black.
pub const RGB_TO_ARINC: [u8; 8] = [
    COLOR_BLACK,
    COLOR_BLUE,
    COLOR_GREEN,
    COLOR_CYAN,
    COLOR_RED,
    COLOR_MAGENTA,
    COLOR_YELLOW,
    COLOR_WHITE,
];

pub const COLOR_BLACK: u8 = 0b000;
pub const COLOR_BLUE: u8 = 0b000;
pub const COLOR_GREEN: u8 = 0b100;
pub const COLOR_CYAN: u8 = 0b101;
pub const COLOR_RED: u8 = 0b110;
pub const COLOR_MAGENTA: u8 = 0b001;
pub const COLOR_YELLOW: u8 = 0b010;
pub const COLOR_WHITE: u8 = 0b111;

/// Ratio of source-raster pixels to range bins along a ray for the
/// reference calibration image.
pub const DEFAULT_RELATIVE_RADIUS: f64 = 0.75;

/// Scan-center pixel coordinates of the reference calibration image.
pub const DEFAULT_CENTER_X: u32 = 392;
pub const DEFAULT_CENTER_Y: u32 = 385;

/// Pause between transmitted data words, in microseconds.
pub const DEFAULT_INTER_PACKET_DELAY_US: u64 = 4400;

/// Default destination for the transceiver emulation.
pub const DEFAULT_DEVICE_ADDR: &str = "192.168.1.18";
pub const DEFAULT_DEVICE_PORT: u16 = 8888;
