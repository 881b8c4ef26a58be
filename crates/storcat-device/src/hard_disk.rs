//! Hard disk drive variant

use storcat_types::{DeviceKind, StorageDevice};
use tracing::debug;

/// A hard disk whose volume is the product of partition count and size
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardDisk {
    name: String,
    model: String,
    /// USB transfer speed in MB/s
    usb_speed_mbps: f64,
    /// Number of partitions
    partition_count: u32,
    /// Size of each partition in MB
    partition_size_mb: f64,
}

impl HardDisk {
    /// Create a new hard disk
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        usb_speed_mbps: f64,
        partition_count: u32,
        partition_size_mb: f64,
    ) -> Self {
        let disk = Self {
            name: name.into(),
            model: model.into(),
            usb_speed_mbps,
            partition_count,
            partition_size_mb,
        };
        debug!("Created hard disk: {:?}", disk);
        disk
    }

    /// USB transfer speed in MB/s
    pub fn usb_speed_mbps(&self) -> f64 {
        self.usb_speed_mbps
    }

    /// Number of partitions
    pub fn partition_count(&self) -> u32 {
        self.partition_count
    }

    /// Size of each partition in MB
    pub fn partition_size_mb(&self) -> f64 {
        self.partition_size_mb
    }
}

impl StorageDevice for HardDisk {
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
        DeviceKind::HardDisk
    }

    fn transfer_speed_mbps(&self) -> f64 {
        self.usb_speed_mbps
    }

    fn storage_volume(&self) -> f64 {
        f64::from(self.partition_count) * self.partition_size_mb
    }

    fn free_space(&self) -> f64 {
        // Mirrors the nominal formula: partition total minus reported volume
        f64::from(self.partition_count) * self.partition_size_mb - self.storage_volume()
    }

    fn device_info(&self) -> String {
        format!(
            "HDD: {}, Model: {}, USB Speed: {} MB/s, Partitions: {}, Partition Size: {} MB",
            self.name, self.model, self.usb_speed_mbps, self.partition_count, self.partition_size_mb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hdd1() -> HardDisk {
        HardDisk::new("HDD1", "Model3", 50.0, 2, 1024.0)
    }

    #[rstest]
    #[case(2, 1024.0, 2048.0)]
    #[case(4, 512.0, 2048.0)]
    #[case(1, 100.5, 100.5)]
    fn test_storage_volume_is_partition_product(
        #[case] partitions: u32,
        #[case] size_mb: f64,
        #[case] expected: f64,
    ) {
        let disk = HardDisk::new("HDD1", "Model3", 50.0, partitions, size_mb);
        assert_eq!(disk.storage_volume(), expected);
    }

    #[test]
    fn test_free_space_is_degenerate_zero() {
        assert_eq!(hdd1().free_space(), 0.0);
    }

    #[test]
    fn test_device_info_contains_name_and_model() {
        let info = hdd1().device_info();
        assert!(info.contains("HDD1"));
        assert!(info.contains("Model3"));
        assert_eq!(
            info,
            "HDD: HDD1, Model: Model3, USB Speed: 50 MB/s, Partitions: 2, Partition Size: 1024 MB"
        );
    }

    #[test]
    fn test_copy_notice_uses_hdd_label() {
        let mut out = Vec::new();
        hdd1().copy_data(565.0, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Copying data to HDD. Speed: 50 MB/s. Data size: 565 MB\n"
        );
    }
}
