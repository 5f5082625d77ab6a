use rand::{rngs::StdRng, Rng, SeedableRng};

use resamp_image::{Image, ImageError, ImageSize, PixelGrid};
use resamp_imgproc::grid::is_node;
use resamp_imgproc::resize::{upscaled, ScaleMode};
use resamp_imgproc::rotate::{rotate90_ccw, rotate90_cw, rotated, RotationDirection};

const MODES: [ScaleMode; 3] = [ScaleMode::Sparse, ScaleMode::Linear, ScaleMode::Cubic];

fn random_image(rng: &mut StdRng, size: ImageSize) -> Result<PixelGrid, ImageError> {
    let data = (0..size.area() * 3).map(|_| rng.random::<u8>()).collect();
    Image::new(size, data)
}

fn random_size(rng: &mut StdRng) -> ImageSize {
    ImageSize {
        width: rng.random_range(1..9),
        height: rng.random_range(1..9),
    }
}

#[test]
fn upscaled_size_is_scale_times_source() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let size = random_size(&mut rng);
        let image = random_image(&mut rng, size)?;
        let scale = rng.random_range(1..6);

        for mode in MODES {
            let scaled = upscaled(&image, scale, mode)?;
            assert_eq!(scaled.width(), image.width() * scale);
            assert_eq!(scaled.height(), image.height() * scale);
        }
    }

    Ok(())
}

#[test]
fn nodes_hold_source_pixels() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let size = random_size(&mut rng);
        let image = random_image(&mut rng, size)?;
        let scale = rng.random_range(1..6);

        for mode in MODES {
            let scaled = upscaled(&image, scale, mode)?;
            for sy in 0..image.height() {
                for sx in 0..image.width() {
                    assert_eq!(
                        scaled.pixel(sx * scale, sy * scale),
                        image.pixel(sx, sy),
                        "{mode} x{scale} node ({sx}, {sy})"
                    );
                }
            }
        }
    }

    Ok(())
}

#[test]
fn scale_one_is_identity() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..10 {
        let size = random_size(&mut rng);
        let image = random_image(&mut rng, size)?;
        assert_eq!(upscaled(&image, 1, ScaleMode::Linear)?, image);
        assert_eq!(upscaled(&image, 1, ScaleMode::Cubic)?, image);
    }

    Ok(())
}

#[test]
fn sparse_leaves_non_nodes_blank() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(5);
    let image = random_image(&mut rng, ImageSize { width: 4, height: 3 })?;
    let scaled = upscaled(&image, 4, ScaleMode::Sparse)?;

    for y in 0..scaled.height() {
        for x in 0..scaled.width() {
            if !is_node(x, y, 4) {
                assert_eq!(scaled.pixel(x, y), &[0, 0, 0]);
            }
        }
    }

    Ok(())
}

#[test]
fn linear_stays_within_node_range() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(13);
    let image = random_image(&mut rng, ImageSize { width: 6, height: 5 })?;
    let scaled = upscaled(&image, 3, ScaleMode::Linear)?;

    let (min, max) = image
        .as_slice()
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    assert!(scaled.as_slice().iter().all(|&v| v >= min && v <= max));

    Ok(())
}

#[test]
fn cubic_matches_linear_without_full_window() -> Result<(), ImageError> {
    // with three nodes per line every interval touches a border
    let mut rng = StdRng::seed_from_u64(17);
    let image = random_image(&mut rng, ImageSize { width: 3, height: 3 })?;

    assert_eq!(
        upscaled(&image, 4, ScaleMode::Cubic)?,
        upscaled(&image, 4, ScaleMode::Linear)?
    );

    Ok(())
}

#[test]
fn rotation_round_trip() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..20 {
        let size = random_size(&mut rng);
        let image = random_image(&mut rng, size)?;

        for direction in [
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        ] {
            let turned = rotated(&image, direction)?;
            assert_eq!(rotated(&turned, direction.inverse())?, image, "{direction}");
        }
    }

    Ok(())
}

#[test]
fn rotation_swaps_dimensions() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(29);
    let image = random_image(&mut rng, ImageSize { width: 3, height: 5 })?;

    let mut cw = Image::from_size_val(image.size().transposed(), 0u8)?;
    rotate90_cw(&image, &mut cw)?;
    assert_eq!(cw.width(), 5);
    assert_eq!(cw.height(), 3);

    let mut ccw = Image::from_size_val(image.size().transposed(), 0u8)?;
    rotate90_ccw(&image, &mut ccw)?;
    assert_eq!(ccw.width(), 5);
    assert_eq!(ccw.height(), 3);

    // two quarter turns in the same direction are a half turn
    let half = rotated(&cw, RotationDirection::Clockwise)?;
    let reversed: Vec<u8> = image
        .as_slice()
        .chunks_exact(3)
        .rev()
        .flatten()
        .copied()
        .collect();
    assert_eq!(half.as_slice(), reversed);

    Ok(())
}
