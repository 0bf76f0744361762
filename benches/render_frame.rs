use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mandelbrot_viewer::{Complex, PixelBuffer, ViewState, ViewerSettings, draw_fractal};

fn bench_default_view(c: &mut Criterion) {
    let settings = ViewerSettings::default();
    let view = ViewState::new(&settings);
    let mut canvas = PixelBuffer::new(settings.screen_width, settings.screen_height);

    c.bench_function("draw_fractal_default_view", |b| {
        b.iter(|| draw_fractal(black_box(&view), &settings, &mut canvas));
    });
}

fn bench_deep_iterations(c: &mut Criterion) {
    let settings = ViewerSettings::default();
    let mut view = ViewState::new(&settings);
    view.iteration_limit = settings.max_iteration_limit;
    view.center_x = -0.743;
    view.center_y = 0.131;
    view.zoom = 4_000.0;
    let mut canvas = PixelBuffer::new(settings.screen_width, settings.screen_height);

    c.bench_function("draw_fractal_max_iterations", |b| {
        b.iter(|| draw_fractal(black_box(&view), &settings, &mut canvas));
    });
}

fn bench_julia(c: &mut Criterion) {
    let settings = ViewerSettings::default();
    let mut view = ViewState::new(&settings);
    view.view_flags.julia_mode = true;
    view.julia_constant = Complex::new(-0.8, 0.156);
    view.iteration_limit = 200;
    let mut canvas = PixelBuffer::new(settings.screen_width, settings.screen_height);

    c.bench_function("draw_fractal_julia", |b| {
        b.iter(|| draw_fractal(black_box(&view), &settings, &mut canvas));
    });
}

criterion_group!(benches, bench_default_view, bench_deep_iterations, bench_julia);
criterion_main!(benches);
