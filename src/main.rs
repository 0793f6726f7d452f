use log::{error, info};
use mandelbrot_explorer::{MandelbrotConfig, PpmFilePresenter, RenderToFileController};

const OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MandelbrotConfig::default();

    info!(
        "rendering {}x{} Mandelbrot image to {}",
        config.width, config.height, OUTPUT_PATH
    );

    let controller = RenderToFileController::new(PpmFilePresenter::new(), config)
        .inspect_err(|err| error!("invalid configuration: {}", err))?;

    controller
        .render_initial(OUTPUT_PATH)
        .inspect_err(|err| error!("render failed: {}", err))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
