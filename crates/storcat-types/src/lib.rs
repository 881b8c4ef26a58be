//! Core type system and error handling for storcat
//!
//! This crate provides the foundational types shared by the storcat storage
//! catalog. It includes:
//!
//! - **Capability set**: the [`StorageDevice`] trait every device variant
//!   implements (capacity, free space, simulated copy, info line)
//! - **Core types**: [`DeviceKind`] and [`OpticalLayer`]
//! - **Error handling**: the crate-wide [`Error`] and [`Result`] types
//!
//! # Features
//!
//! - `serde` (default): Enable serialization support for device types
//!
//! # Examples
//!
//! ```rust
//! use storcat_types::StorageDevice;
//!
//! fn describe(device: &dyn StorageDevice) -> String {
//!     format!("{} ({} MB)", device.name(), device.storage_volume())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod device;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use device::{DeviceKind, OpticalLayer, StorageDevice};
pub use error::Error;
pub use result::Result;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_kind_labels() {
        assert_eq!(DeviceKind::Flash.to_string(), "Flash");
        assert_eq!(DeviceKind::Optical.to_string(), "DVD");
        assert_eq!(DeviceKind::HardDisk.to_string(), "HDD");
    }

    #[test]
    fn test_error_from_io() {
        let err = Error::from(std::io::Error::other("sink gone"));
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("sink gone"));
    }
}
