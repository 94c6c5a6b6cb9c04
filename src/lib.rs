//! ARINC 708 weather-radar video emulator.
//!
//! Turns one still raster image of a radar display into a full revolution
//! of ARINC 708 data words: 4096 scan angles, 512 three-bit range bins
//! each, transmitted over UDP at the bus cadence to stand in for a real
//! transceiver's video output.

pub mod angle;
pub mod color;
pub mod config;
pub mod consts;
pub mod error;
pub mod packet;
pub mod raster;
pub mod ray;
pub mod scan;

pub use config::Config;
pub use error::{Error, Result};
pub use packet::{HeaderConfig, Packet, PacketBuilder};
pub use raster::Raster;
pub use ray::{OffRasterPolicy, ScanGeometry};
pub use scan::{ScanDriver, Transport, UdpTransport};
