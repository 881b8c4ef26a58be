//! Storage device variants for the storcat catalog
//!
//! This crate provides the concrete device types behind the
//! [`StorageDevice`](storcat_types::StorageDevice) capability set:
//!
//! - [`FlashDrive`]: USB flash drive with a fixed memory size
//! - [`OpticalDisc`]: DVD whose volume depends on its layer type
//! - [`HardDisk`]: hard disk whose volume is partitions times partition size
//!
//! Each variant owns its attributes exclusively; devices are constructed
//! once and read-only thereafter.
//!
//! # Examples
//!
//! ```rust
//! use storcat_device::FlashDrive;
//! use storcat_types::StorageDevice;
//!
//! let drive = FlashDrive::new("Flash1", "Model1", 100.0, 2048.0);
//! assert_eq!(drive.storage_volume(), 2048.0);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod flash;
pub mod hard_disk;
pub mod optical;

// Re-export main types
pub use flash::FlashDrive;
pub use hard_disk::HardDisk;
pub use optical::OpticalDisc;
