use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

use binome_core::Clock;
use services::{PairingService, ShuffleSound, load_roster};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    pairing: Arc<PairingService>,
    shuffle_sound: Option<Arc<ShuffleSound>>,
}

impl UiApp for DesktopApp {
    fn pairing(&self) -> Arc<PairingService> {
        Arc::clone(&self.pairing)
    }

    fn shuffle_sound(&self) -> Option<Arc<ShuffleSound>> {
        self.shuffle_sound.clone()
    }
}

struct Args {
    images_dir: PathBuf,
    sound_file: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--images <dir>] [--sound <file>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --images images");
    eprintln!("  --sound  sounds/shuffle.wav");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BINOME_IMAGES, BINOME_SOUND");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut images_dir = std::env::var("BINOME_IMAGES")
            .map_or_else(|_| PathBuf::from("images"), PathBuf::from);
        let mut sound_file = std::env::var("BINOME_SOUND")
            .map_or_else(|_| PathBuf::from("sounds/shuffle.wav"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--images" => {
                    images_dir = PathBuf::from(require_value(args, "--images")?);
                }
                "--sound" => {
                    sound_file = PathBuf::from(require_value(args, "--sound")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            images_dir,
            sound_file,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // A missing image folder is fatal; nothing to pair without it.
    let roster = load_roster(&args.images_dir)?;
    let pairing = Arc::new(PairingService::new(roster, Clock::default_clock()));
    if pairing.roster().is_empty() {
        tracing::warn!(
            path = %args.images_dir.display(),
            "no participant images found; the first draw will report exhaustion"
        );
    }
    let shuffle_sound = ShuffleSound::load_optional(&args.sound_file).map(Arc::new);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        pairing,
        shuffle_sound,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Binômage")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
