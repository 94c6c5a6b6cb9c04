use std::{fs::File, io::prelude::*, path::Path, time::Duration};

use anyhow::{Context, Result};
use log::debug;

use arinc708_wxr::{
    Config, PacketBuilder, Raster, ScanDriver, ScanGeometry, UdpTransport,
};

fn main() -> Result<()> {
    env_logger::init();
    println!("Running...");

    let config: Config = match std::env::args().nth(1) {
        Some(path) => {
            let mut config_file = File::open(&path)?;
            let mut config_str = String::new();
            config_file.read_to_string(&mut config_str)?;
            toml::from_str(&config_str)?
        }
        None => Config::default(),
    };
    debug!("config: {:?}", config);

    let raster = load_raster(&config.source_image)?;
    println!(
        "source raster {}x{}, scan center ({}, {})",
        raster.width(),
        raster.height(),
        config.center_x,
        config.center_y
    );

    let mut geometry = ScanGeometry::for_raster(&raster, config.center_x, config.center_y);
    geometry.relative_radius = config.relative_radius;
    geometry.off_raster = config.off_raster;

    let transport = UdpTransport::connect(config.destination()?)?;
    let builder = PacketBuilder::new(config.header, geometry);
    let pacing = Duration::from_micros(config.inter_packet_delay_us);

    let sent = ScanDriver::new(builder, transport, pacing).run(&raster)?;
    println!("transmitted {} packets", sent);

    if let Some(path) = &config.preview_image {
        save_preview(&raster, path)?;
        println!("preview written to {}", path.display());
    }

    Ok(())
}

/// Image-decoding collaborator: anything `image` can open becomes a
/// tightly packed RGB8 raster satisfying the encoder's input contract.
fn load_raster(path: &Path) -> Result<Raster> {
    let decoded = image::open(path)
        .with_context(|| format!("opening source image {}", path.display()))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    Ok(Raster::from_packed(width, height, decoded.into_raw())?)
}

/// Write the posterized diagnostic copy so the quantizer's view of the
/// source can be eyeballed.
fn save_preview(raster: &Raster, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &raster.posterized(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("writing preview image {}", path.display()))
}
