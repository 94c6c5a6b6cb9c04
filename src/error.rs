//! Error taxonomy for the encoder and transport.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Socket setup failed. Fatal before any packet is sent.
    #[error("socket setup failed: {0}")]
    Socket(#[source] std::io::Error),

    /// The configured destination is not a valid address. Fatal.
    #[error("invalid destination address {addr:?}: {reason}")]
    Address { addr: String, reason: String },

    /// The source raster does not satisfy the input contract. Rejected
    /// before the first packet is built.
    #[error("raster contract violation: {0}")]
    RasterContract(String),

    /// A single datagram failed to send. Best effort only; the driver
    /// logs and keeps scanning.
    #[error("send failed for scan angle {scan_angle}: {source}")]
    Send {
        scan_angle: u16,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
