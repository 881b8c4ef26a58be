//! Optical disc (DVD) variant

use storcat_types::{DeviceKind, OpticalLayer, StorageDevice};
use tracing::debug;

/// Nominal volume of a single-layer disc, in MB
const SINGLE_LAYER_VOLUME_MB: f64 = 4.7;

/// Nominal volume of a dual-layer disc, in MB
const DUAL_LAYER_VOLUME_MB: f64 = 9.0;

/// An optical disc whose volume is fixed by its layer type
///
/// The nominal volumes are the familiar DVD figures (4.7 and 9) carried
/// over with their MB label intact.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpticalDisc {
    name: String,
    model: String,
    /// Read/write speed in MB/s
    read_write_speed_mbps: f64,
    /// Layer type determining the nominal volume
    layer: OpticalLayer,
}

impl OpticalDisc {
    /// Create a new optical disc
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        read_write_speed_mbps: f64,
        layer: OpticalLayer,
    ) -> Self {
        let disc = Self {
            name: name.into(),
            model: model.into(),
            read_write_speed_mbps,
            layer,
        };
        debug!("Created optical disc: {:?}", disc);
        disc
    }

    /// Read/write speed in MB/s
    pub fn read_write_speed_mbps(&self) -> f64 {
        self.read_write_speed_mbps
    }

    /// Layer type of the disc
    pub fn layer(&self) -> OpticalLayer {
        self.layer
    }
}

impl StorageDevice for OpticalDisc {
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
        DeviceKind::Optical
    }

    fn transfer_speed_mbps(&self) -> f64 {
        self.read_write_speed_mbps
    }

    fn storage_volume(&self) -> f64 {
        match self.layer {
            OpticalLayer::SingleLayer => SINGLE_LAYER_VOLUME_MB,
            OpticalLayer::DualLayer => DUAL_LAYER_VOLUME_MB,
        }
    }

    fn free_space(&self) -> f64 {
        // Optical media is not write-tracked: always reports full volume
        self.storage_volume()
    }

    fn device_info(&self) -> String {
        format!(
            "DVD: {}, Model: {}, Read/Write Speed: {} MB/s, Type: {}",
            self.name, self.model, self.read_write_speed_mbps, self.layer
        )
    }
}
