use log::error;
use mandelbrot_explorer::{MandelbrotConfig, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = RunGuiCommand::new(MandelbrotConfig::default());

    command
        .execute()
        .inspect_err(|err| error!("explorer stopped: {}", err))?;

    Ok(())
}
