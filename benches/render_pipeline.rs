//! Benchmarks for a full frame fill across strategies and worker counts.
//!
//! Run with: cargo bench --bench render_pipeline

use std::num::NonZeroU32;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::core::actions::render_frame::fill_frame;
use mandelbrot_explorer::core::data::image_size::ImageSize;
use mandelbrot_explorer::core::data::pixel_buffer::PixelBuffer;
use mandelbrot_explorer::core::fractals::mandelbrot::algorithm::{
    DEFAULT_ESCAPE_RADIUS, MandelbrotAlgorithm,
};
use mandelbrot_explorer::core::fractals::mandelbrot::colour_mapping::factory::{
    mandelbrot_colour_map_factory,
};
use mandelbrot_explorer::{MandelbrotColourMapKinds, MandelbrotConfig, RenderStrategy};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

fn bench_fill_frame(c: &mut Criterion) {
    let size = ImageSize::new(WIDTH, HEIGHT).unwrap();
    let config = MandelbrotConfig {
        width: WIDTH,
        height: HEIGHT,
        initial_zoom: f64::from(WIDTH) * 0.25296875,
        ..MandelbrotConfig::default()
    };
    let view = config.initial_view().unwrap();
    let max_iterations = view.max_iterations(WIDTH);
    let algorithm = MandelbrotAlgorithm::new(max_iterations, DEFAULT_ESCAPE_RADIUS).unwrap();
    let colour_map =
        mandelbrot_colour_map_factory(MandelbrotColourMapKinds::SmoothSine, DEFAULT_ESCAPE_RADIUS);
    let mut buffer = PixelBuffer::new(size);

    let mut group = c.benchmark_group("fill_frame");
    group.throughput(Throughput::Elements(u64::from(WIDTH) * u64::from(HEIGHT)));

    for strategy in [RenderStrategy::ScopedThreads, RenderStrategy::Rayon] {
        for workers in [1, 4, 16] {
            let worker_count = NonZeroU32::new(workers).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), workers),
                &worker_count,
                |b, &worker_count| {
                    b.iter(|| {
                        fill_frame(
                            &mut buffer.view_mut(),
                            black_box(&view),
                            &algorithm,
                            colour_map.as_ref(),
                            strategy,
                            worker_count,
                        )
                        .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fill_frame);
criterion_main!(benches);
