//! Emulator configuration.
//!
//! Loaded from a TOML file by the applications; every field has a default
//! matching the reference calibration, so an empty file is a valid config.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_CENTER_X, DEFAULT_CENTER_Y, DEFAULT_DEVICE_ADDR, DEFAULT_DEVICE_PORT,
    DEFAULT_INTER_PACKET_DELAY_US, DEFAULT_RELATIVE_RADIUS,
};
use crate::error::Error;
use crate::packet::HeaderConfig;
use crate::ray::OffRasterPolicy;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// IPv4 address of the device under test.
    pub device_addr: String,
    pub device_port: u16,
    /// Source image handed to the image-decoding collaborator.
    pub source_image: PathBuf,
    /// Where to write the posterized diagnostic preview, if anywhere.
    pub preview_image: Option<PathBuf>,
    /// Scan-center calibration of the source raster.
    pub center_x: u32,
    pub center_y: u32,
    pub relative_radius: f64,
    /// Pause between data words, in microseconds.
    pub inter_packet_delay_us: u64,
    pub off_raster: OffRasterPolicy,
    pub header: HeaderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_addr: DEFAULT_DEVICE_ADDR.to_string(),
            device_port: DEFAULT_DEVICE_PORT,
            source_image: PathBuf::from("EXAMPLE.JPG"),
            preview_image: None,
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            relative_radius: DEFAULT_RELATIVE_RADIUS,
            inter_packet_delay_us: DEFAULT_INTER_PACKET_DELAY_US,
            off_raster: OffRasterPolicy::default(),
            header: HeaderConfig::default(),
        }
    }
}

impl Config {
    /// Parse the configured destination into a socket address.
    pub fn destination(&self) -> Result<SocketAddr, Error> {
        let ip: Ipv4Addr = self.device_addr.parse().map_err(|e| Error::Address {
            addr: self.device_addr.clone(),
            reason: format!("{}", e),
        })?;
        Ok(SocketAddr::from((ip, self.device_port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_reference_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.device_addr, "192.168.1.18");
        assert_eq!(config.device_port, 8888);
        assert_eq!(config.center_x, 392);
        assert_eq!(config.center_y, 385);
        assert_eq!(config.inter_packet_delay_us, 4400);
        assert_eq!(config.off_raster, OffRasterPolicy::Skip);
    }

    #[test]
    fn overrides_apply() {
        let config: Config = toml::from_str(
            r#"
            device_addr = "127.0.0.1"
            device_port = 9999
            off_raster = "clamp_to_edge"

            [header]
            range = 0b111111
            "#,
        )
        .unwrap();
        assert_eq!(config.device_port, 9999);
        assert_eq!(config.off_raster, OffRasterPolicy::ClampToEdge);
        assert_eq!(config.header.range, 0b111111);
    }

    #[test]
    fn bad_address_is_an_address_error() {
        let config = Config {
            device_addr: "not-an-ip".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.destination(), Err(Error::Address { .. })));
    }
}
