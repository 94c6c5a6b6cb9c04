//! Paced transmission of one full antenna revolution.

use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::thread;
use std::time::Duration;

use itertools::Itertools;
use log::{debug, log_enabled, trace, warn, Level};

use crate::consts::{RANGE_BINS, SCAN_ANGLES_PER_REV};
use crate::error::Error;
use crate::packet::{Packet, PacketBuilder};
use crate::raster::Raster;

/// Outbound link carrying one data word per call.
pub trait Transport {
    fn send(&mut self, packet: &Packet) -> Result<(), Error>;
}

/// Fire-and-forget UDP link to a fixed destination. One socket, opened
/// once, used sequentially for the whole run.
pub struct UdpTransport {
    socket: UdpSocket,
    destination: SocketAddr,
}

impl UdpTransport {
    pub fn connect(destination: SocketAddr) -> Result<Self, Error> {
        let socket =
            UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(Error::Socket)?;
        Ok(Self {
            socket,
            destination,
        })
    }
}

impl Transport for UdpTransport {
    fn send(&mut self, packet: &Packet) -> Result<(), Error> {
        self.socket
            .send_to(packet.as_bytes(), self.destination)
            .map_err(|source| Error::Send {
                scan_angle: packet.scan_angle(),
                source,
            })?;
        Ok(())
    }
}

/// Walks all 4096 scan-angle codes, building and transmitting one packet
/// per code at a fixed cadence.
pub struct ScanDriver<T: Transport> {
    builder: PacketBuilder,
    transport: T,
    pacing: Duration,
}

impl<T: Transport> ScanDriver<T> {
    pub fn new(builder: PacketBuilder, transport: T, pacing: Duration) -> Self {
        Self {
            builder,
            transport,
            pacing,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One full revolution over `raster`. The protocol is unacknowledged,
    /// so a failed send is logged and the scan keeps going; the return
    /// value is the number of packets that left the socket.
    pub fn run(&mut self, raster: &Raster) -> Result<u32, Error> {
        let geometry = self.builder.geometry();
        if geometry.width != raster.width() || geometry.height != raster.height() {
            return Err(Error::RasterContract(format!(
                "geometry calibrated for {}x{} but raster is {}x{}",
                geometry.width,
                geometry.height,
                raster.width(),
                raster.height()
            )));
        }

        let mut sent = 0u32;
        for code in 0..SCAN_ANGLES_PER_REV {
            let packet = self.builder.build(code, raster);

            if log_enabled!(Level::Trace) {
                trace!(
                    "scan angle {}: {}",
                    code,
                    (0..RANGE_BINS).map(|bin| packet.color_code(bin)).format(" ")
                );
            }

            match self.transport.send(&packet) {
                Ok(()) => sent += 1,
                Err(error) => warn!("{}", error),
            }

            if !self.pacing.is_zero() {
                thread::sleep(self.pacing);
            }
        }

        debug!("revolution complete, {} packets transmitted", sent);
        Ok(sent)
    }
}
