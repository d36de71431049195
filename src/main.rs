#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;

mod rhyme;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::io;
use tracing_subscriber::EnvFilter;

use rhyme::config::{self, GenerateConfig, QueryConfig};
use rhyme::errors::Result;
use rhyme::finder::RhymeFinder;

fn print_separator() {
    println!("\n----------------------------------------");
}

/// Logs go to stderr so that stdout carries only results. `RUST_LOG` overrides the level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn map_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("map")
            .long("map")
            .value_name("FILE")
            .takes_value(true)
            .help("The rhyme map to load. Default: $RHYMER_MAP_PATH or ./rhyme_map.txt"),
        Arg::with_name("tie-break")
            .long("tie-break")
            .value_name("RULE")
            .takes_value(true)
            .possible_values(&["first-loaded", "lowest-tail"])
            .help("Which bucket wins when a word has several tails. Default: $RHYMER_TIE_BREAK or first-loaded"),
    ]
}

fn load_finder(config: &QueryConfig) -> Result<RhymeFinder> {
    let finder = RhymeFinder::from_map_file(&config.map_path, config.tie_break)?;
    tracing::info!(
        patterns = finder.pattern_count(),
        words = finder.total_words(),
        tie_break = %finder.tie_break(),
        "rhyme finder initialized"
    );
    return Ok(finder);
}

fn generate(m: &ArgMatches) -> Result<()> {
    let config = GenerateConfig::from_matches(m);
    let stats = rhyme::generate::run(&config)?;
    println!(
        "Rhyme data building process completed: {} of {} lines indexed.",
        stats.indexed, stats.lines
    );
    return Ok(());
}

fn query(m: &ArgMatches) -> Result<()> {
    let config = QueryConfig::from_matches(m)?;
    let finder = load_finder(&config)?;

    print_separator();
    println!("Pattern count: {}", finder.pattern_count());
    println!("Total words: {}", finder.total_words());
    print_separator();

    let stdin = io::stdin();
    let stdout = io::stdout();
    rhyme::repl::run(&finder, stdin.lock(), &mut stdout.lock())
        .map_err(|e| rhyme::errors::RhymeError::io("<stdio>", e))?;
    return Ok(());
}

async fn serve(m: &ArgMatches<'_>) -> Result<()> {
    let config = QueryConfig::from_matches(m)?;
    let finder = load_finder(&config)?;
    return rhyme::server::run(finder).await;
}

#[rocket::main]
async fn main() {
    init_logging();

    let matches = App::new("rhymer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds and queries a rhyme dictionary from a cmudict-style pronunciation file.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("generate")
                .about("Groups dictionary words by rhyme tail and writes the rhyme data files.")
                .arg(
                    Arg::with_name("dictionary")
                        .long("dictionary")
                        .value_name("FILE")
                        .takes_value(true)
                        .default_value(config::DEFAULT_DICTIONARY_PATH)
                        .help("The cmudict-format pronunciation dictionary to read."),
                )
                .arg(
                    Arg::with_name("output-dir")
                        .long("output-dir")
                        .value_name("DIR")
                        .takes_value(true)
                        .help("Where to write the data files. Default: $RHYMER_OUTPUT_DIR or ./output"),
                )
                .arg(
                    Arg::with_name("emit-source")
                        .long("emit-source")
                        .help("Also write the data as Rust source for embedding."),
                ),
        )
        .subcommand(
            SubCommand::with_name("query")
                .about("Reads words from stdin and prints their rhymes.")
                .args(&map_args()),
        )
        .subcommand(
            SubCommand::with_name("serve")
                .about("Serves rhyme lookups over HTTP.")
                .args(&map_args()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("generate", Some(m)) => generate(m),
        ("query", Some(m)) => query(m),
        ("serve", Some(m)) => serve(m).await,
        // SubcommandRequiredElseHelp exits before we get here.
        _ => unreachable!(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
