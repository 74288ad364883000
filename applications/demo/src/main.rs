//! Reel Player demo application
//!
//! Exercises the player core against a console-simulated media session:
//! a single looping video or a small playlist, interactive navigation,
//! and simulated app-lifecycle transitions.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use reel_player::{
    LifecycleBridge, LifecycleHub, LifecycleSignal, MediaSession, PlaybackController,
    PlaybackDelegate, PlayerConfig, PlaylistItem, VecDataSource,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[command(name = "reel-demo")]
#[command(about = "Reel Player terminal demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single looping video
    Single {
        /// Repeat display strings to exercise long-label rendering
        #[arg(long)]
        long_names: bool,
    },

    /// Play the sample playlist
    Playlist,
}

/// Media session that narrates transitions instead of decoding video
struct ConsoleMediaSession {
    loaded: Option<Url>,
}

impl ConsoleMediaSession {
    fn new() -> Self {
        Self { loaded: None }
    }
}

impl MediaSession for ConsoleMediaSession {
    fn load_looping(&mut self, locator: &Url) -> reel_player::Result<()> {
        info!(%locator, "loading resource (muted, looping)");
        self.loaded = Some(locator.clone());
        Ok(())
    }

    fn play(&mut self) {
        match &self.loaded {
            Some(locator) => info!(%locator, "playing"),
            None => info!("play requested with nothing loaded"),
        }
    }

    fn pause(&mut self) {
        info!("paused");
    }
}

struct DemoDelegate;

impl PlaybackDelegate for DemoDelegate {
    fn will_play(&mut self, item: &PlaylistItem, index: usize) {
        info!(title = %item.title, index, "about to play");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut player =
        PlaybackController::new(Box::new(ConsoleMediaSession::new()), PlayerConfig::default());
    player.set_delegate(Rc::new(RefCell::new(DemoDelegate)));
    player.set_visible(true);

    match cli.command {
        Commands::Single { long_names } => {
            anyhow::ensure!(
                player.prepare_single(single_item(long_names)),
                "failed to load the demo video"
            );
        }
        Commands::Playlist => {
            let items = sample_playlist();
            let playlist = VecDataSource::new(items.clone());
            // Start in the middle so both navigation controls are visible.
            anyhow::ensure!(
                player.prepare_with_playlist(&items[1], playlist),
                "failed to load the demo playlist"
            );
        }
    }
    player.play();

    run_loop(player)
}

fn run_loop(player: PlaybackController) -> Result<()> {
    let hub = LifecycleHub::new();
    let player = Rc::new(RefCell::new(player));
    let _bridge = LifecycleBridge::install(&hub, Rc::clone(&player));

    render(&player.borrow());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        match words.next() {
            Some("n" | "next") => player.borrow_mut().next(),
            Some("p" | "prev") => player.borrow_mut().previous(),
            Some("play") => player.borrow_mut().play(),
            Some("pause") => player.borrow_mut().pause(),
            Some("g" | "goto") => match words.next().and_then(|word| word.parse().ok()) {
                Some(index) => {
                    if !player.borrow_mut().set_current_index(index) {
                        println!("index {index} is out of range");
                    }
                }
                None => println!("usage: g <index>"),
            },
            Some("bg") => hub.post(LifecycleSignal::WillResignActive),
            Some("fg") => hub.post(LifecycleSignal::BecameActive),
            Some("h" | "help") => print_help(),
            Some("q" | "quit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }

        render(&player.borrow());
    }

    Ok(())
}

/// Draw the player "screen": navigation markers, display strings, position
fn render(player: &PlaybackController) {
    let nav = player.navigation();

    println!();
    if let Some(display) = player.display() {
        let previous = if nav.previous_hidden { " " } else { "<" };
        let next = if nav.next_hidden { " " } else { ">" };
        println!("  {previous}  {}  {next}", display.title);
        println!("     {}", display.subtitle);
        println!("     {}", display.credit);
        println!("     item {}", player.current_index() + 1);
    } else {
        println!("  (nothing to show)");
    }
    println!();
}

fn print_help() {
    println!("commands: n/next, p/prev, play, pause, g <index>, bg, fg, h/help, q/quit");
}

fn single_item(long_names: bool) -> PlaylistItem {
    let format_name = |name: &str| {
        if long_names {
            [name; 8].join(" ")
        } else {
            name.to_string()
        }
    };

    PlaylistItem::new(
        Url::parse("https://media.example.com/welcome.mp4").expect("static url"),
        format_name("Welcome"),
        format_name("Example subtitle"),
        format_name("(c) 2026 Example"),
    )
}

fn sample_playlist() -> Vec<PlaylistItem> {
    let title = "Bat";
    let mammal = "nocturnal mouselike mammal with membranous wings, navigating by echolocation";
    let object = "strike with, or as if with, a baseball bat";

    let clip = |path: &str, subtitle: &str, credit: &str| {
        PlaylistItem::new(
            Url::parse(&format!("https://media.example.com/{path}")).expect("static url"),
            title,
            subtitle,
            credit,
        )
    };

    vec![
        clip("bat-archive.mp4", mammal, "Archive Films"),
        clip("bat-field.mp4", mammal, "Field Unit"),
        clip("bat-uploads.mp4", mammal, ""),
        clip("bat-lexicon.mp4", object, "Lexicon Media"),
    ]
}
