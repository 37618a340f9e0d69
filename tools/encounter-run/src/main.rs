//! encounter-run: headless runner for the STAY encounter.
//!
//! Usage:
//!   encounter-run run --script patient-cover --seconds 20 --seed 7
//!   encounter-run run --config encounter.json --script rush
//!   encounter-run scripts
//!   encounter-run defaults

use std::path::PathBuf;
use std::process;

use serde_json::json;
use tracing::info;

use stay_core::config::HostConfig;
use stay_core::errors::ScenarioError;
use stay_sim::scenario::{run_script, ScriptId};
use stay_sim::Host;

const DEFAULT_SECONDS: f32 = 20.0;
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => {
            if let Err(e) = cmd_run(&args[2..]) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        "scripts" => cmd_scripts(),
        "defaults" => cmd_defaults(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "encounter-run: STAY encounter runner\n\
         \n\
         Commands:\n\
         \n\
         run       Drive the encounter with a scripted player hand\n\
         \n\
           --config <path>    Host config JSON (optional, default: built-in tuning)\n\
           --script <name>    Input script (default: idle)\n\
           --seconds <s>      Seconds to simulate (default: 20)\n\
           --seed <n>         Override the RNG seed\n\
         \n\
         scripts   List input scripts\n\
         defaults  Print the default host config as JSON\n\
         \n\
         Output: one JSON event per line on stdout, then the final frame.\n\
         Set RUST_LOG=info for transition logs on stderr.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    match flag_value(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                eprintln!("Error: invalid value for {flag}: {raw}");
                process::exit(1);
            }
        },
        None => None,
    }
}

fn load_config(path: Option<PathBuf>) -> Result<HostConfig, ScenarioError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(HostConfig::from_json_str(&json)?)
        }
        None => Ok(HostConfig::default()),
    }
}

fn cmd_run(args: &[String]) -> Result<(), ScenarioError> {
    let mut config = load_config(flag_value(args, "--config").map(PathBuf::from))?;
    if let Some(seed) = parse_flag::<u64>(args, "--seed") {
        config.encounter.seed = seed;
    }
    let script = ScriptId::parse(flag_value(args, "--script").unwrap_or("idle"))?;
    let seconds = parse_flag::<f32>(args, "--seconds").unwrap_or(DEFAULT_SECONDS);

    info!(
        script = script.name(),
        seconds,
        seed = config.encounter.seed,
        "run started"
    );

    let smoothing = config.player.smoothing;
    let mut host = Host::new(config)?;
    let frames = run_script(&mut host, script, smoothing, seconds, FRAME_DT);

    for frame in &frames {
        for event in &frame.snapshot.events {
            println!("{}", json!({ "time": frame.snapshot.time, "event": event }));
        }
    }

    if let Some(last) = frames.last() {
        match serde_json::to_string_pretty(last) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: could not serialize final frame: {e}"),
        }
    }
    Ok(())
}

fn cmd_scripts() {
    for script in ScriptId::ALL {
        println!("{:<14} {}", script.name(), script.description());
    }
}

fn cmd_defaults() {
    match serde_json::to_string_pretty(&HostConfig::default()) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
