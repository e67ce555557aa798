use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use toonface::{
    Accessory, AnimationLoop, AvatarOptions, AvatarRenderer, CancelToken, Canvas, EyeStyle,
    HairStyle, Mood, MouthStyle, PngSequenceSink, Rgb8, Rng64, TrackCatalog, clamp_blush,
    export_png, format_time, randomize,
};

#[derive(Parser, Debug)]
#[command(name = "toonface", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an avatar from options to a PNG.
    Avatar(AvatarArgs),
    /// Draw random avatar options, print them, and optionally render them.
    Random(RandomArgs),
    /// Render mood particle frames as a PNG sequence.
    Mood(MoodArgs),
    /// List recommended tracks for a mood or genre key.
    Tracks(TracksArgs),
}

#[derive(Args, Debug)]
struct AvatarArgs {
    /// Options JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas edge in pixels.
    #[arg(long, default_value_t = 400)]
    size: u32,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug, Default)]
struct StyleArgs {
    /// short, medium, long, ponytail or twintails.
    #[arg(long)]
    hair_style: Option<HairStyle>,
    /// Hair color, e.g. `#4B3621`.
    #[arg(long)]
    hair_color: Option<Rgb8>,
    /// round, almond, narrow or wide.
    #[arg(long)]
    eye_style: Option<EyeStyle>,
    /// Iris color.
    #[arg(long)]
    eye_color: Option<Rgb8>,
    /// smile, neutral or smirk.
    #[arg(long)]
    mouth_style: Option<MouthStyle>,
    /// Head color.
    #[arg(long)]
    skin_tone: Option<Rgb8>,
    /// none, glasses, eyepatch, mask or headphones.
    #[arg(long)]
    accessory: Option<Accessory>,
    /// Blush opacity in percent; clamped to 0..=100.
    #[arg(long, allow_negative_numbers = true)]
    blush: Option<i64>,
}

impl StyleArgs {
    fn apply(&self, mut opts: AvatarOptions) -> AvatarOptions {
        if let Some(v) = self.hair_style {
            opts.hair_style = v;
        }
        if let Some(v) = self.hair_color {
            opts.hair_color = v;
        }
        if let Some(v) = self.eye_style {
            opts.eye_style = v;
        }
        if let Some(v) = self.eye_color {
            opts.eye_color = v;
        }
        if let Some(v) = self.mouth_style {
            opts.mouth_style = v;
        }
        if let Some(v) = self.skin_tone {
            opts.skin_tone = v;
        }
        if let Some(v) = self.accessory {
            opts.accessory = v;
        }
        if let Some(v) = self.blush {
            opts.blush_intensity = clamp_blush(v);
        }
        opts
    }
}

#[derive(Args, Debug)]
struct RandomArgs {
    /// Seed for reproducible draws; defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Also render the avatar to this PNG.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Canvas edge in pixels.
    #[arg(long, default_value_t = 400)]
    size: u32,
}

#[derive(Args, Debug)]
struct MoodArgs {
    /// Mood name; unknown names use neutral.
    #[arg(long, conflicts_with = "expression")]
    mood: Option<String>,

    /// Face-expression label to map to a mood (e.g. `fearful`).
    #[arg(long)]
    expression: Option<String>,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Output directory for `mood_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 96)]
    height: u32,

    /// Particle seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Args, Debug)]
struct TracksArgs {
    /// Mood whose pairing to list.
    #[arg(long, conflicts_with = "genre")]
    mood: Option<String>,

    /// Raw genre key such as `pop,happy`.
    #[arg(long)]
    genre: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Avatar(args) => cmd_avatar(args),
        Command::Random(args) => cmd_random(args),
        Command::Mood(args) => cmd_mood(args),
        Command::Tracks(args) => cmd_tracks(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_avatar(args: AvatarArgs) -> anyhow::Result<()> {
    let base = match &args.config {
        Some(path) => AvatarOptions::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => AvatarOptions::default(),
    };
    let opts = args.style.apply(base);
    render_to(&opts, args.size, &args.out)
}

fn cmd_random(args: RandomArgs) -> anyhow::Result<()> {
    let mut rng = args.seed.map_or_else(Rng64::from_time, Rng64::new);
    let opts = randomize(&mut rng);
    println!("{}", opts.to_json()?);
    if let Some(out) = &args.out {
        render_to(&opts, args.size, out)?;
    }
    Ok(())
}

fn render_to(opts: &AvatarOptions, size: u32, out: &Path) -> anyhow::Result<()> {
    let canvas = Canvas::square(size)?;
    let mut renderer = AvatarRenderer::new(canvas);
    let frame = renderer
        .render(opts)
        .context("no drawing surface available for this canvas")?;
    export_png(&frame, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_mood(args: MoodArgs) -> anyhow::Result<()> {
    let mood = match (&args.mood, &args.expression) {
        (_, Some(expr)) => Mood::from_expression(expr),
        (Some(name), None) => Mood::from_name(name),
        (None, None) => Mood::Neutral,
    };
    let canvas = Canvas::new(args.width, args.height)?;
    let mut anim = AnimationLoop::new(mood, canvas, args.seed)?;
    let mut sink = PngSequenceSink::new(&args.out_dir, "mood");
    let stats = anim.run(args.frames, &mut sink, &CancelToken::new())?;
    eprintln!(
        "wrote {} {mood} frames to {}",
        stats.frames_rendered,
        sink.dir().display()
    );
    Ok(())
}

fn cmd_tracks(args: TracksArgs) -> anyhow::Result<()> {
    let catalog = TrackCatalog::builtin();
    let tracks = match (&args.genre, &args.mood) {
        (Some(genre), _) => catalog.tracks(genre),
        (None, Some(mood)) => catalog.for_mood(Mood::from_name(mood)),
        (None, None) => catalog.for_mood(Mood::Neutral),
    };
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(tracks).context("serialize tracks")?
        );
        return Ok(());
    }
    for t in tracks {
        println!(
            "{:<4} {:<20} {:<20} {}",
            t.id,
            t.title,
            t.artist,
            format_time(t.duration_secs)
        );
    }
    Ok(())
}
