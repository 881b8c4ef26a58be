//! The storage device capability set
//!
//! This module defines the polymorphic interface shared by all device
//! variants in the catalog, together with the enums naming variants and
//! optical layer types.

use crate::Result;
use std::fmt;
use std::io::Write;

/// Device variant kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceKind {
    /// USB flash drive
    Flash,
    /// Optical disc (DVD)
    Optical,
    /// Hard disk drive
    HardDisk,
}

impl DeviceKind {
    /// Get a human-readable description of the device kind
    pub fn description(self) -> &'static str {
        match self {
            Self::Flash => "Flash Drive",
            Self::Optical => "DVD",
            Self::HardDisk => "HDD",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short labels used in copy notices
        let label = match self {
            Self::Flash => "Flash",
            Self::Optical => "DVD",
            Self::HardDisk => "HDD",
        };
        f.write_str(label)
    }
}

/// Layer type of an optical disc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpticalLayer {
    /// Single recording layer (4.7 MB nominal volume)
    SingleLayer,
    /// Dual recording layer (9 MB nominal volume)
    DualLayer,
}

impl fmt::Display for OpticalLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SingleLayer => "Single-layer",
            Self::DualLayer => "Dual-layer",
        };
        f.write_str(label)
    }
}

/// Capability set implemented by every storage device variant
///
/// Capacity and free space are pure arithmetic over the variant's fields;
/// [`copy_data`](StorageDevice::copy_data) only emits a notice line and
/// never mutates capacity accounting, so capacity queries are stable across
/// any number of copy invocations.
pub trait StorageDevice {
    /// Device name
    fn name(&self) -> &str;

    /// Device model
    fn model(&self) -> &str;

    /// Replace the device name
    fn set_name(&mut self, name: String);

    /// Replace the device model
    fn set_model(&mut self, model: String);

    /// Which variant this device is
    fn kind(&self) -> DeviceKind;

    /// Transfer speed used for simulated copies, in MB/s
    fn transfer_speed_mbps(&self) -> f64;

    /// Total capacity in MB, per the variant-specific formula
    fn storage_volume(&self) -> f64;

    /// Remaining capacity in MB, per the variant-specific formula
    fn free_space(&self) -> f64;

    /// Formatted one-line summary of the device
    fn device_info(&self) -> String;

    /// Simulate copying `data_size_mb` megabytes to this device
    ///
    /// Writes a single notice line to `out`. The copy is simulated, not
    /// tracked: stored capacity and free space are unaffected.
    fn copy_data(&self, data_size_mb: f64, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Copying data to {}. Speed: {} MB/s. Data size: {} MB",
            self.kind(),
            self.transfer_speed_mbps(),
            data_size_mb
        )?;
        Ok(())
    }
}
