//! Sequential report rendering over a device list

use std::io::Write;
use storcat_types::{Result, StorageDevice};
use tracing::{debug, info};

/// Data size in MB used for every simulated copy in the report
pub const COPY_DATA_SIZE_MB: f64 = 565.0;

/// Renders the catalog report over an ordered list of devices
///
/// The report is a single linear pass: for each device an info line, a
/// free-space line, a copy notice, and a blank separator, followed by the
/// total storage volume across all devices.
pub struct ReportRunner {
    devices: Vec<Box<dyn StorageDevice>>,
}

impl ReportRunner {
    /// Create a runner over an ordered device list
    pub fn new(devices: Vec<Box<dyn StorageDevice>>) -> Self {
        Self { devices }
    }

    /// Devices in report order
    pub fn devices(&self) -> &[Box<dyn StorageDevice>] {
        &self.devices
    }

    /// Sum of storage volumes across all devices, in MB
    pub fn total_volume_mb(&self) -> f64 {
        self.devices.iter().map(|d| d.storage_volume()).sum()
    }

    /// Write the full report to `out`
    pub fn write_report(&self, out: &mut dyn Write) -> Result<()> {
        debug!("Rendering report for {} devices", self.devices.len());

        for device in &self.devices {
            debug!("Reporting on device: {}", device.name());
            writeln!(out, "{}", device.device_info())?;
            writeln!(out, "Free space: {} MB", device.free_space())?;
            device.copy_data(COPY_DATA_SIZE_MB, out)?;
            writeln!(out)?;
        }

        let total = self.total_volume_mb();
        writeln!(out, "Total storage volume: {} MB", total)?;

        info!("Report complete: {} MB total volume", total);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_catalog;

    fn render() -> String {
        let runner = ReportRunner::new(builtin_catalog());
        let mut out = Vec::new();
        runner.write_report(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_total_volume() {
        let runner = ReportRunner::new(builtin_catalog());
        assert_eq!(runner.total_volume_mb(), 4100.7);
    }

    #[test]
    fn test_empty_catalog_reports_zero_total() {
        let runner = ReportRunner::new(Vec::new());
        let mut out = Vec::new();
        runner.write_report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total storage volume: 0 MB\n"
        );
    }

    #[test]
    fn test_report_is_stable_across_runs() {
        // Copies are simulated, so rendering twice yields identical output
        assert_eq!(render(), render());
    }

    #[test]
    fn test_free_space_lines() {
        let text = render();
        let free_lines: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("Free space:"))
            .collect();
        assert_eq!(
            free_lines,
            vec![
                "Free space: 0 MB",
                "Free space: 4.7 MB",
                "Free space: 0 MB"
            ]
        );
    }
}
