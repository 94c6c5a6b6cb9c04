//! Polar-to-raster coordinate mapping.
//!
//! One ray is 512 range bins along a decoded bearing. Each bin maps to a
//! pixel of the source raster through the scan-center calibration.

use serde::Deserialize;

use crate::consts::DEFAULT_RELATIVE_RADIUS;
use crate::raster::Raster;

/// What to do with a bin whose geometric coordinate falls off the low edge
/// of the raster.
///
/// The upper edge is always clamped. The low edge is genuinely ambiguous:
/// the reference hardware display blanks off-screen returns, but clamping
/// keeps the edge pixel's color instead. Both are supported; `Skip` (bin
/// renders black) is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffRasterPolicy {
    #[default]
    Skip,
    ClampToEdge,
}

/// Calibration tying ray geometry to a specific source raster.
#[derive(Clone, Copy, Debug)]
pub struct ScanGeometry {
    pub width: u32,
    pub height: u32,
    pub center_x: u32,
    pub center_y: u32,
    pub relative_radius: f64,
    pub off_raster: OffRasterPolicy,
}

impl ScanGeometry {
    /// Geometry for `raster` with the given scan center and the reference
    /// radius scale.
    pub fn for_raster(raster: &Raster, center_x: u32, center_y: u32) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            center_x,
            center_y,
            relative_radius: DEFAULT_RELATIVE_RADIUS,
            off_raster: OffRasterPolicy::default(),
        }
    }

    /// Map one (bearing, range-bin) pair to a raster pixel.
    ///
    /// `None` means the bin is off-raster under the `Skip` policy and
    /// carries no return. Coordinates past the high edge clamp to the edge
    /// pixel, so any `Some` coordinate is in bounds.
    pub fn map(&self, bearing_degrees: f64, radius: u16) -> Option<(u32, u32)> {
        let r = f64::from(radius) * self.relative_radius;
        let theta = bearing_degrees.to_radians();

        let x = r * theta.cos();
        let x = x.round() as i64 + i64::from(self.center_x);

        // Zero bearing points toward decreasing y on the display.
        let y = r * theta.sin();
        let y = i64::from(self.center_y) - y.round() as i64;

        let (x, y) = match self.off_raster {
            OffRasterPolicy::Skip => {
                if x < 0 || y < 0 {
                    return None;
                }
                (x, y)
            }
            OffRasterPolicy::ClampToEdge => (x.max(0), y.max(0)),
        };

        Some((
            (x as u32).min(self.width - 1),
            (y as u32).min(self.height - 1),
        ))
    }
}
