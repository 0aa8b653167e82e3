use std::pin::pin;

use clap::Parser;
use config::Args;
use dictionary::Dictionary;
use lookup::{DefinitionSource, LookupController};
use render::{render_to_string, submit_enabled};
use tracing_subscriber::EnvFilter;
use utilities::{input, is_quit_command};

mod config;
mod lookup;
mod render;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .with_writer(std::io::stderr)
        .init();

    let dict = Dictionary::with_config(args.dictionary_config());
    tracing::debug!(api_url = dict.base_url(), "dictionary client ready");
    let controller = LookupController::new(dict);

    if !args.words.is_empty() {
        for word in &args.words {
            search(&controller, word).await;
        }
        return Ok(());
    }

    loop {
        debug_assert!(controller.with_state(submit_enabled));
        let Some(term) = input(">> ")? else {
            println!();
            break;
        };
        if is_quit_command(&term) {
            break;
        }
        if term.trim().is_empty() {
            continue;
        }
        search(&controller, &term).await;
    }
    Ok(())
}

/// Runs one search, showing the loading indicator if the response is not
/// immediately available, then prints the final state.
async fn search<S: DefinitionSource>(controller: &LookupController<S>, term: &str) {
    let mut pending = pin!(controller.search(term));
    if futures::poll!(&mut pending).is_pending() {
        print_state(controller);
        pending.await;
    }
    print_state(controller);
}

fn print_state<S: DefinitionSource>(controller: &LookupController<S>) {
    print!("{}", controller.with_state(render_to_string));
}
