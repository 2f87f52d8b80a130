mod runtime;
mod view;

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use slidein::cli::CliArgs;
use slidein::config::ConsoleConfig;

use runtime::App;

fn main() -> Result<()> {
    slidein::tracing::init();

    let startup = CliArgs::parse().into_config()?;

    let mut config = ConsoleConfig::load();
    if let Some(delay) = startup.close_delay_ms {
        config.close_delay_ms = delay;
    }
    tracing::info!(
        "starting with host {:?}, close delay {}ms",
        startup.host.id,
        config.close_delay_ms
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, startup.host);

    event_loop.run_app(&mut app)?;

    Ok(())
}
