use clap::Parser;
use flagfall_core::{CellCount, Coord, GameConfig};
use wasm_bindgen::prelude::*;

pub use game::{IntervalTicks, TICK_MILLIS};
pub use store::LocalBestTime;

mod game;
mod store;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side, the board is always square
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Arguments come from the location hash, e.g. `#--size=16&--mines=40&-vv`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.size, self.mines).unwrap_or_else(|err| {
            log::warn!(
                "Invalid board {}x{} with {} mines ({}), using defaults",
                self.size,
                self.size,
                self.mines,
                err
            );
            GameConfig::default()
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, args_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = args_error {
        log::warn!("Could not parse arguments, using defaults: {}", err);
    }
    log::debug!("seed: {:?}", args.seed);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let props = game::GameProps {
        config: args.game_config(),
        seed: args.seed,
    };
    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
