// SPDX-License-Identifier: MPL-2.0
use corner_toast::config::ToastConfig;
use corner_toast::render::{MarkupRenderer, Render};
use corner_toast::surface::MemorySurface;
use corner_toast::toast::{resolve_with, PartialOptions, Position, ToastType, Toaster};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn toast_rendering_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_rendering");
    let config = ToastConfig::default();

    group.bench_function("resolve_options", |b| {
        b.iter(|| {
            black_box(resolve_with(
                &config,
                Some("Saved!"),
                PartialOptions::new()
                    .toast_type(ToastType::Success)
                    .position(Position::BottomLeft)
                    .duration_ms(1000),
            ))
        });
    });

    let options = resolve_with(&config, Some("Saved <b>everything</b>!"), PartialOptions::new());
    group.bench_function("render_markup", |b| {
        b.iter(|| black_box(MarkupRenderer.render(black_box(&options))));
    });

    group.bench_function("show_and_hide_without_runtime", |b| {
        let toaster = Toaster::with_surface(Arc::new(MemorySurface::new()));
        b.iter(|| {
            let toast = toaster.toast(Some("Saved!"), PartialOptions::new().auto_close(false));
            toast.show().expect("show succeeds");
            toast.hide();
        });
    });

    group.finish();
}

criterion_group!(benches, toast_rendering_benchmark);
criterion_main!(benches);
