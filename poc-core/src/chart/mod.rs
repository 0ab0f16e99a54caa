//! Chart initializer and the seam to the rendering backend.
//!
//! The page's charting library is reached only through `ChartRenderer`, which
//! takes a typed `ChartConfig` and returns a handle that can tear the chart
//! down again. `mount_charts` decides which charts apply to the current page.

pub mod config;
pub mod presets;

pub use config::ChartConfig;

use crate::error::ChartError;
use crate::settings::{ROI_PROJECTION_CHART_ID, TIME_COMPARISON_CHART_ID};

/// A live chart that can be disposed.
pub trait ChartHandle {
    fn mount_id(&self) -> &str;
    fn destroy(self);
}

/// Backend that draws a config into a mount point.
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn render(&self, mount_id: &str, config: &ChartConfig) -> Result<Self::Handle, ChartError>;
}

/// Answers whether the page has a given mount point.
pub trait MountLookup {
    fn has_mount(&self, id: &str) -> bool;
}

/// A chart and the element id it renders into.
#[derive(Debug, Clone, Copy)]
pub struct ChartMount {
    pub mount_id: &'static str,
    pub build: fn() -> ChartConfig,
}

/// Charts on the PoC report page.
pub const REPORT_CHARTS: [ChartMount; 2] = [
    ChartMount {
        mount_id: TIME_COMPARISON_CHART_ID,
        build: presets::time_comparison,
    },
    ChartMount {
        mount_id: ROI_PROJECTION_CHART_ID,
        build: presets::roi_projection,
    },
];

/// Render every chart whose mount point exists. Missing mounts are skipped
/// silently; render failures are logged and skipped.
pub fn mount_charts<M, R>(mounts: &M, renderer: &R, charts: &[ChartMount]) -> Vec<R::Handle>
where
    M: MountLookup + ?Sized,
    R: ChartRenderer + ?Sized,
{
    let mut handles = Vec::with_capacity(charts.len());
    for chart in charts {
        if !mounts.has_mount(chart.mount_id) {
            log::debug!("No mount point for chart {}, skipping", chart.mount_id);
            continue;
        }
        match renderer.render(chart.mount_id, &(chart.build)()) {
            Ok(handle) => handles.push(handle),
            Err(e) => log::warn!("Failed to render chart {}: {}", chart.mount_id, e),
        }
    }
    handles
}

/// Charts currently live on the page. Mounting a new set destroys the old one,
/// so a chart never renders twice into the same canvas.
#[derive(Debug)]
pub struct MountedCharts<H: ChartHandle> {
    handles: Vec<H>,
}

impl<H: ChartHandle> Default for MountedCharts<H> {
    fn default() -> Self {
        Self { handles: Vec::new() }
    }
}

impl<H: ChartHandle> MountedCharts<H> {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Keep `handles`, destroying whatever was mounted before.
    pub fn replace(&mut self, handles: Vec<H>) {
        self.destroy_all();
        self.handles = handles;
    }

    pub fn destroy_all(&mut self) {
        for handle in self.handles.drain(..) {
            log::debug!("Destroying chart {}", handle.mount_id());
            handle.destroy();
        }
    }
}
