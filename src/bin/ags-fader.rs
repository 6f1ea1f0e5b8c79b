use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use ags_raster::{
    Capabilities, Effect, Engine, EngineOpts, FrameRGBA, HeadlessBackend, MAX_STEP, PixelFormat,
    Point, Rect, Rgb,
};
use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "ags-fader", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one transition over a demo scene and write every presented frame as a PNG.
    Render(RenderArgs),
    /// List the transition effects with their numeric ids.
    Effects,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Effect name or numeric id.
    #[arg(long, default_value = "crossfade")]
    effect: Effect,

    /// Output directory for the PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Engine options JSON. Flags below override individual fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height.
    #[arg(long)]
    height: Option<u32>,

    /// Canvas pixel layout.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Pretend the display has no polygon support (forces the crossfade fallback).
    #[arg(long)]
    no_polygon: bool,

    /// Print the SHA-256 of every written frame.
    #[arg(long)]
    digest: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Indexed8,
    Rgb565,
    Rgb888,
    Xrgb8888,
}

impl From<FormatChoice> for PixelFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Indexed8 => PixelFormat::Indexed8,
            FormatChoice::Rgb565 => PixelFormat::Rgb565,
            FormatChoice::Rgb888 => PixelFormat::Rgb888,
            FormatChoice::Xrgb8888 => PixelFormat::Xrgb8888,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Effects => {
            for e in Effect::ALL {
                println!("{:>2}  {e}", e.id());
            }
            Ok(())
        }
    }
}

fn read_opts_json(path: &Path) -> anyhow::Result<EngineOpts> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let opts: EngineOpts = serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(opts)
}

fn resolve_opts(args: &RenderArgs) -> anyhow::Result<EngineOpts> {
    let mut opts = match &args.config {
        Some(path) => read_opts_json(path)?,
        None => EngineOpts::default().with_size(320, 200),
    }
    .with_env();
    if let Some(w) = args.width {
        opts.width = w;
    }
    if let Some(h) = args.height {
        opts.height = h;
    }
    if let Some(f) = args.format {
        opts.format = f.into();
    }
    Ok(opts)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let opts = resolve_opts(&args)?;
    let caps = if args.no_polygon {
        Capabilities::none()
    } else {
        Capabilities::full()
    };
    let backend = HeadlessBackend::new()
        .with_capabilities(caps)
        .with_history(true);
    let mut engine = Engine::new(opts, backend)?;

    let w = engine.canvas().width() as i32;
    let h = engine.canvas().height() as i32;
    engine.set_palette(&demo_palette(), 0, 256)?;
    draw_old_scene(&mut engine, w, h);
    engine.present();
    draw_new_scene(&mut engine, w, h);

    engine.begin_transition(args.effect, Rect::new(0, 0, w, h), Point::new(0, 0))?;
    for step in 0..=MAX_STEP {
        engine.step_transition(step)?;
    }
    engine.finish_transition()?;
    if engine.transition_fell_back() {
        eprintln!("{} unsupported by the display, used crossfade", args.effect);
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    let frames = engine.backend().history();
    for (i, frame) in frames.iter().enumerate() {
        let path = args.out.join(format!("frame-{i:03}.png"));
        write_png(&path, frame)?;
        if args.digest {
            println!("{}  {}", sha256_hex(&frame.data), path.display());
        }
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out.display());
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn demo_palette() -> Vec<Rgb> {
    (0..256u32)
        .map(|i| Rgb::new(i as u8, (i * 7 % 256) as u8, (255 - i) as u8))
        .collect()
}

fn draw_old_scene(engine: &mut Engine<HeadlessBackend>, w: i32, h: i32) {
    engine.fill_rect(0, 0, w, h, 16);
    let d = (w / 8).max(2);
    for i in 0..8 {
        engine.fill_circle(i * w / 8, h / 3, d, 40 + (i as u8) * 24);
    }
    engine.draw_line(0, h - 1, w - 1, 0, 250);
    engine.draw_rect(2, 2, w - 4, h - 4, 200);
}

fn draw_new_scene(engine: &mut Engine<HeadlessBackend>, w: i32, h: i32) {
    engine.fill_rect(0, 0, w, h, 230);
    for i in 0..6 {
        let band = h / 6;
        engine.fill_rect(0, i * band, w, band / 2, 60 + (i as u8) * 30);
    }
    engine.draw_rect(w / 4, h / 4, w / 2, h / 2, 0);
    engine.flood_fill(w / 2, h / 2, 128);
    engine.wrap_color(0, 0, w / 3, h, 255, 96);
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
