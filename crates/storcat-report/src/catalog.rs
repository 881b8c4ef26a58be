//! The built-in device catalog

use storcat_device::{FlashDrive, HardDisk, OpticalDisc};
use storcat_types::{OpticalLayer, StorageDevice};
use tracing::debug;

/// Build the fixed three-device catalog, one device per variant
///
/// Parameters are literal constants; the catalog is constructed once at
/// startup and read-only thereafter.
pub fn builtin_catalog() -> Vec<Box<dyn StorageDevice>> {
    let devices: Vec<Box<dyn StorageDevice>> = vec![
        Box::new(FlashDrive::new("Flash1", "Model1", 100.0, 2048.0)),
        Box::new(OpticalDisc::new(
            "DVD1",
            "Model2",
            10.0,
            OpticalLayer::SingleLayer,
        )),
        Box::new(HardDisk::new("HDD1", "Model3", 50.0, 2, 1024.0)),
    ];
    debug!("Built catalog with {} devices", devices.len());
    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use storcat_types::DeviceKind;

    #[test]
    fn test_catalog_order_and_kinds() {
        let devices = builtin_catalog();
        let kinds: Vec<DeviceKind> = devices.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![DeviceKind::Flash, DeviceKind::Optical, DeviceKind::HardDisk]
        );
    }

    #[test]
    fn test_catalog_volumes() {
        let devices = builtin_catalog();
        assert_eq!(devices[0].storage_volume(), 2048.0);
        assert_eq!(devices[1].storage_volume(), 4.7);
        assert_eq!(devices[2].storage_volume(), 2048.0);
    }
}
