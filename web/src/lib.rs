use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod theme;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Reads arguments from the location hash, e.g. `#-vv&--theme=dark`.
    ///
    /// Unparseable hashes fall back to the defaults; the error is handed back
    /// so it can be logged once a logger exists.
    fn from_location_hash(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::try_parse_from(hash.split(['#', '&'])) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
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

    let (args, parse_error) = Args::from_location_hash(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("ignoring arguments in {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
