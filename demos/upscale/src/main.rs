use argh::FromArgs;
use std::path::PathBuf;

use resamp::imgproc::pipeline::{apply_all, Transform};
use resamp::io::{functional as F, png};

#[derive(FromArgs)]
/// Upscale and rotate an image, then write the result as png
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output png image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// transform to apply, in order: sparse:N, linear:N, cubic:N, cw or ccw
    #[argh(option, short = 't')]
    transform: Vec<Transform>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let image = F::read_image_any_rgb8(&args.image_path)?;
    log::info!("loaded {} {}", args.image_path.display(), image.size());

    if args.transform.is_empty() {
        log::warn!("no transform given, writing the input unchanged");
    }

    // every transform consumes the output of the previous one
    let output = apply_all(&image, &args.transform)?;

    png::write_image_png_rgb8(&args.output_path, &output)?;
    log::info!("wrote {} {}", args.output_path.display(), output.size());

    Ok(())
}
