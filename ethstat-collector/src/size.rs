//! Link speed unit conversion.

/// Unit suffixes reported by ethtool, in ascending powers of 1024.
///
/// The ladder scales bits by 1024 rather than 1000; exported values depend
/// on this.
pub const UNIT_LADDER: [&str; 9] = ["b", "Kb", "Mb", "Gb", "Tb", "Pb", "Eb", "Zb", "Yb"];

/// Position of `unit` on the ladder, if it is known.
pub fn unit_power(unit: &str) -> Option<u32> {
    UNIT_LADDER
        .iter()
        .position(|u| *u == unit)
        .map(|p| p as u32)
}

/// Convert `magnitude` expressed in `unit` to bits.
///
/// Unknown units leave the magnitude unscaled.
// TODO: check the unscaled fallback against captures from drivers that
// report speeds outside the ladder.
pub fn convert_size(magnitude: u64, unit: &str) -> f64 {
    if magnitude == 0 {
        return 0.0;
    }
    let power = unit_power(unit).unwrap_or(0);
    magnitude as f64 * 1024f64.powi(power as i32)
}
