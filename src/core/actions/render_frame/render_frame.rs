use std::num::NonZeroU32;
use std::thread;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::core::actions::render_frame::errors::{FillFrameError, RenderFrameError};
use crate::core::actions::render_frame::fill_band::FrameJob;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::actions::render_frame::report::RenderReport;
use crate::core::data::pixel_buffer::{PixelBufferView, RowBand};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::calculate_work_chunks::calculate_work_chunks;
use crate::core::util::calculate_worker_count::calculate_worker_count;
use crate::core::view::view_state::ViewState;

/// How worker tasks are scheduled. Both give byte-identical frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// One scoped OS thread per work chunk.
    #[default]
    ScopedThreads,
    /// Work chunks run on a rayon pool sized to the worker count.
    Rayon,
}

fn fill_bands_scoped_threads<A, C>(
    bands: Vec<RowBand<'_>>,
    job: &FrameJob<'_, A, C>,
) -> Result<(), FillFrameError>
where
    A: EscapeTimeAlgorithm + Sync + ?Sized,
    C: ColourMap + Sync + ?Sized,
{
    thread::scope(|scope| -> Result<(), FillFrameError> {
        let handles = bands
            .into_iter()
            .map(|mut band| scope.spawn(move || job.fill_band(&mut band)))
            .collect::<Vec<_>>();

        // join everything before looking at results so no worker outlives the pass
        let results = handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>();

        for result in results {
            result.map_err(|_| FillFrameError::WorkerPanicked)??;
        }

        Ok(())
    })
}

fn fill_bands_rayon<A, C>(
    bands: Vec<RowBand<'_>>,
    job: &FrameJob<'_, A, C>,
    worker_count: NonZeroU32,
) -> Result<(), FillFrameError>
where
    A: EscapeTimeAlgorithm + Sync + ?Sized,
    C: ColourMap + Sync + ?Sized,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count.get() as usize)
        .thread_name(|index| format!("render-worker-{}", index))
        .build()?;

    pool.install(|| {
        bands
            .into_par_iter()
            .try_for_each(|mut band| job.fill_band(&mut band))
    })?;

    Ok(())
}

/// Recomputes every pixel of `buffer` for `view`, blocking until all workers finish.
///
/// Each worker owns one disjoint band of rows, so no locking is needed.
pub fn fill_frame<A, C>(
    buffer: &mut PixelBufferView<'_>,
    view: &ViewState,
    algorithm: &A,
    colour_map: &C,
    strategy: RenderStrategy,
    worker_count: NonZeroU32,
) -> Result<(), FillFrameError>
where
    A: EscapeTimeAlgorithm + Sync + ?Sized,
    C: ColourMap + Sync + ?Sized,
{
    let image_size = buffer.size();
    let chunks = calculate_work_chunks(image_size.height(), worker_count);

    debug!(
        "splitting {} rows into {} chunks ({:?})",
        image_size.height(),
        chunks.len(),
        strategy
    );

    let bands = buffer.split_into_bands(&chunks)?;
    let job = FrameJob {
        image_size,
        view,
        algorithm,
        colour_map,
    };

    match strategy {
        RenderStrategy::ScopedThreads => fill_bands_scoped_threads(bands, &job),
        RenderStrategy::Rayon => fill_bands_rayon(bands, &job, worker_count),
    }
}

/// Renders a view onto a display surface and presents it.
#[derive(Debug)]
pub struct ParallelRenderer {
    strategy: RenderStrategy,
    worker_count: Option<NonZeroU32>,
    escape_radius: f64,
    colour_map: Box<dyn MandelbrotColourMap>,
}

impl ParallelRenderer {
    #[must_use]
    pub fn new(config: &MandelbrotConfig) -> Self {
        Self {
            strategy: config.render_strategy,
            worker_count: config.worker_count,
            escape_radius: config.escape_radius,
            colour_map: mandelbrot_colour_map_factory(config.colour_map_kind, config.escape_radius),
        }
    }

    /// Fills the surface's whole pixel buffer, then presents it exactly once.
    ///
    /// Nothing is presented if any part of the pass fails.
    pub fn render<S: DisplaySurface>(
        &self,
        view: &ViewState,
        surface: &mut S,
    ) -> Result<RenderReport, RenderFrameError<S::Error>> {
        let start = Instant::now();
        let image_size = surface.size();
        let max_iterations = view.max_iterations(image_size.width());
        let algorithm = MandelbrotAlgorithm::new(max_iterations, self.escape_radius)?;
        let worker_count = calculate_worker_count(image_size.height(), self.worker_count);

        {
            let mut buffer = surface.pixel_buffer().map_err(FillFrameError::from)?;

            fill_frame(
                &mut buffer,
                view,
                &algorithm,
                self.colour_map.as_ref(),
                self.strategy,
                worker_count,
            )?;
        }

        surface.present().map_err(RenderFrameError::Present)?;

        let report = RenderReport {
            center: view.center(),
            zoom: view.zoom(),
            max_iterations: algorithm.max_iterations(),
            worker_count: worker_count.get(),
            duration: start.elapsed(),
        };

        info!(
            "rendered center ({}, {}) zoom {:.4e} with {} iterations on {} workers in {:?}",
            report.center.real,
            report.center.imag,
            report.zoom,
            report.max_iterations,
            report.worker_count,
            report.duration
        );

        surface.show_report(&report);
        Ok(report)
    }
}
