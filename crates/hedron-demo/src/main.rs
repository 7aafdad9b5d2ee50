use anyhow::Result;
use winit::dpi::LogicalSize;

use hedron_engine::device::GpuInit;
use hedron_engine::logging::{LoggingConfig, init_logging};
use hedron_engine::window::{Runtime, RuntimeConfig};

mod app;
mod cube;

use app::CubeApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("hedron cube demo starting");

    let config = RuntimeConfig {
        title: "hedron cube".to_string(),
        initial_size: LogicalSize::new(640.0, 480.0),
    };

    Runtime::run(config, GpuInit::default(), CubeApp::default())
}
