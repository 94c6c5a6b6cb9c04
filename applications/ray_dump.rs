//! Offline diagnostic: build packets for a range of scan angles and print
//! every packed range-bin code, without touching the network.

use std::{fs::File, io::prelude::*, time::Duration};

use anyhow::Result;
use itertools::Itertools;

use arinc708_wxr::{
    angle,
    consts::RANGE_BINS,
    Config, Error, Packet, PacketBuilder, Raster, ScanDriver, ScanGeometry, Transport,
};

/// Transport that prints each packet's ray instead of sending it.
struct PrintingTransport;

impl Transport for PrintingTransport {
    fn send(&mut self, packet: &Packet) -> Result<(), Error> {
        let code = packet.scan_angle();
        let bearing = angle::decode(code);
        for bin in 0..RANGE_BINS {
            let colour = packet.color_code(bin);
            println!(
                "scan angle {:.4}: radius: {} colour:{}",
                bearing,
                bin + 1,
                (0..3).map(|k| colour >> k & 1).format("")
            );
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config: Config = match std::env::args().nth(1) {
        Some(path) => {
            let mut config_file = File::open(&path)?;
            let mut config_str = String::new();
            config_file.read_to_string(&mut config_str)?;
            toml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    let decoded = image::open(&config.source_image)?.to_rgb8();
    let (width, height) = decoded.dimensions();
    let raster = Raster::from_packed(width, height, decoded.into_raw())?;

    let mut geometry = ScanGeometry::for_raster(&raster, config.center_x, config.center_y);
    geometry.relative_radius = config.relative_radius;
    geometry.off_raster = config.off_raster;

    let builder = PacketBuilder::new(config.header, geometry);
    ScanDriver::new(builder, PrintingTransport, Duration::ZERO).run(&raster)?;

    Ok(())
}
