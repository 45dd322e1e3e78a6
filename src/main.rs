use std::env;
use std::process;
use std::time::Instant;

use mandelgrid::{evaluate_parallel, save_image, ColorInfo, Presets, Viewport};

struct Config {
    width: usize,
    height: usize,
    max_iterations: Option<u32>,
    preset: Option<String>,
    coloring: String,
    workers: usize,
    output: String,
}

impl Config {
    fn default() -> Config {
        Config {
            width: 1400,
            height: 800,
            max_iterations: None,
            preset: None,
            coloring: "smooth".to_string(),
            workers: num_cpus::get(),
            output: "mandelbrot.png".to_string(),
        }
    }
}

fn usage() -> ! {
    eprintln!(
        "usage: mandelgrid [options]
  --size WxH         pixel dimensions (default 1400x800)
  --iterations N     iteration bound (default 256, or the preset's depth)
  --preset NAME      one of: {}
  --coloring NAME    one of: {}
  --workers N        worker threads (default: logical CPUs)
  --output PATH      image file to write (default mandelbrot.png)",
        Presets::new().names().join(", "),
        ColorInfo::new().color_names().join(", ")
    );
    process::exit(2);
}

fn parse_size(s: &str) -> Option<(usize, usize)> {
    let (w, h) = s.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

fn parse_args() -> Config {
    let mut config = Config::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().unwrap_or_else(|| {
            eprintln!("{} expects a value", name);
            usage()
        });
        match arg.as_str() {
            "--size" => match parse_size(&value("--size")) {
                Some((w, h)) => {
                    config.width = w;
                    config.height = h;
                }
                None => usage(),
            },
            "--iterations" => match value("--iterations").parse() {
                Ok(n) => config.max_iterations = Some(n),
                Err(_) => usage(),
            },
            "--preset" => config.preset = Some(value("--preset")),
            "--coloring" => config.coloring = value("--coloring"),
            "--workers" => match value("--workers").parse() {
                Ok(n) => config.workers = n,
                Err(_) => usage(),
            },
            "--output" => config.output = value("--output"),
            _ => {
                eprintln!("unknown argument: {}", arg);
                usage();
            }
        }
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args();

    let presets = Presets::new();
    let (viewport, depth) = match &config.preset {
        Some(name) => {
            let preset = presets.by_name(name).unwrap_or_else(|| {
                eprintln!("unknown preset: {}", name);
                usage();
            });
            (
                preset.viewport(config.width, config.height)?,
                preset.iter_depth(),
            )
        }
        None => (Viewport::classic(config.width, config.height)?, 256),
    };
    let max_iterations = config.max_iterations.unwrap_or(depth);

    let coloring = ColorInfo::new().by_name(&config.coloring).unwrap_or_else(|| {
        eprintln!("unknown coloring: {}", config.coloring);
        usage();
    });

    println!("Image size: {}x{} pixels", config.width, config.height);
    println!("Max iterations: {}", max_iterations);

    let start = Instant::now();
    let grid = evaluate_parallel(&viewport, max_iterations, config.workers)?;
    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "Computed in {:.2} ms ({:.2} Mpixels/s, {} workers)",
        elapsed * 1000.0,
        (config.width * config.height) as f64 / elapsed / 1e6,
        config.workers.max(1)
    );

    save_image(&grid, coloring.as_ref(), &config.output)?;
    println!("Saved to {}", config.output);
    Ok(())
}
