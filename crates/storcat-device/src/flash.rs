//! USB flash drive variant

use storcat_types::{DeviceKind, StorageDevice};
use tracing::debug;

/// A USB flash drive with a fixed memory size
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashDrive {
    name: String,
    model: String,
    /// USB transfer speed in MB/s
    usb_speed_mbps: f64,
    /// Memory size in MB
    capacity_mb: f64,
}

impl FlashDrive {
    /// Create a new flash drive
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        usb_speed_mbps: f64,
        capacity_mb: f64,
    ) -> Self {
        let drive = Self {
            name: name.into(),
            model: model.into(),
            usb_speed_mbps,
            capacity_mb,
        };
        debug!("Created flash drive: {:?}", drive);
        drive
    }

    /// USB transfer speed in MB/s
    pub fn usb_speed_mbps(&self) -> f64 {
        self.usb_speed_mbps
    }

    /// Memory size in MB
    pub fn capacity_mb(&self) -> f64 {
        self.capacity_mb
    }
}

impl StorageDevice for FlashDrive {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_model(&mut self, model: String) {
        self.model = model;
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Flash
    }

    fn transfer_speed_mbps(&self) -> f64 {
        self.usb_speed_mbps
    }

    fn storage_volume(&self) -> f64 {
        self.capacity_mb
    }

    fn free_space(&self) -> f64 {
        // Mirrors the nominal formula: capacity minus reported volume
        self.capacity_mb - self.storage_volume()
    }

    fn device_info(&self) -> String {
        format!(
            "Flash Drive: {}, Model: {}, USB Speed: {} MB/s, Memory Size: {} MB",
            self.name, self.model, self.usb_speed_mbps, self.capacity_mb
        )
    }
}
