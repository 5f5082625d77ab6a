use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use resamp_image::Image;
use resamp_imgproc::resize::{upscale, ScaleMode};

fn bench_upscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("Upscale");

    for (width, height) in [(64, 56), (128, 112), (256, 224)].iter() {
        for scale in [2, 4] {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * scale * scale) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, scale);

            // input image
            let image_size = [*width, *height].into();
            let data = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
            let image = Image::<u8, 3>::new(image_size, data).unwrap();

            // output image
            let output_size = image.size().scaled(scale).unwrap();
            let output = Image::<u8, 3>::from_size_val(output_size, 0).unwrap();

            for mode in [ScaleMode::Sparse, ScaleMode::Linear, ScaleMode::Cubic] {
                group.bench_with_input(
                    BenchmarkId::new(mode.to_string(), &parameter_string),
                    &(&image, &output),
                    |b, i| {
                        let (src, mut dst) = (i.0, i.1.clone());
                        b.iter(|| {
                            upscale(black_box(src), black_box(&mut dst), scale, mode).unwrap();
                            black_box(())
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_upscale);
criterion_main!(benches);
