//! rpgme CLI — encode, decode and share RPG-ME character seeds
//!
//! Commands:
//!   rpgme encode  — build a seed from nine trait values
//!   rpgme decode  — read a share query (or bare seed) into a character
//!   rpgme link    — print the share link for a query
//!   rpgme set     — apply one form edit to a query and print the new link
//!   rpgme random  — roll a random character
//!   rpgme attrs   — print the attributes handed to the character element

use rpgme_core::{
    Character, CustomizerConfig, FieldUpdate, QueryParams, ShareLink, TraitField, TraitVector,
    SEED_LEN,
};
use std::env;
use std::process::ExitCode;

const DEFAULT_PATH: &str = "/";

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        RPG-ME — character seeds & share links                ║
╚══════════════════════════════════════════════════════════════╝

Usage: rpgme [--config <file>] <command> [options]

Commands:
  encode  <accessories> <base> <face> <faceItem> <hair> <pants> <shirt> <skin> <hatColor>
  decode  <query-or-seed>                       Show the decoded character as JSON
  link    <query-or-seed> [path]                Share link for the character
  set     <query-or-seed> <field> <value> [path]  Apply a form edit, print new link
  random  [path]                                Random character link
  attrs   <query-or-seed>                       Attributes for the character element

Examples:
  rpgme encode 1 0 2 0 3 0 4 0 5
  rpgme decode "?seed=102030405&hat=pirate&fire=true"
  rpgme link 102030405 /rpg-me/
  rpgme set "seed=102030405" hair 7
  rpgme --config rpgme.json random
"#
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config = match take_config(&mut args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("  Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(command) = args.first().cloned() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    let rest = &args[1..];
    let result = match command.as_str() {
        "encode" => cmd_encode(rest),
        "decode" => cmd_decode(rest, &config),
        "link" => cmd_link(rest, &config),
        "set" => cmd_set(rest, &config),
        "random" => cmd_random(rest, &config),
        "attrs" => cmd_attrs(rest, &config),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Strip `--config <file>` from the arguments and load it, or use defaults
fn take_config(args: &mut Vec<String>) -> Result<CustomizerConfig, Box<dyn std::error::Error>> {
    match args.iter().position(|a| a == "--config") {
        Some(idx) => {
            let path = args
                .get(idx + 1)
                .cloned()
                .ok_or("--config needs a file path")?;
            args.drain(idx..=idx + 1);
            CustomizerConfig::load(path)
        }
        None => Ok(CustomizerConfig::default()),
    }
}

/// A bare seed is accepted as shorthand for `seed=<seed>`
fn params_from_arg(arg: &str) -> QueryParams {
    if arg.contains('=') {
        QueryParams::parse(arg)
    } else {
        QueryParams::parse(&format!("seed={}", urlencoding::encode(arg)))
    }
}

fn load_character(args: &[String], config: &CustomizerConfig) -> Result<Character, String> {
    let arg = args.first().ok_or("missing <query-or-seed>")?;
    let decoded = Character::from_query(&params_from_arg(arg), config);
    if !decoded.outcome.is_applied() {
        eprintln!("  Seed not applied: {:?}", decoded.outcome);
    }
    Ok(decoded.character)
}

fn cmd_encode(args: &[String]) -> CmdResult {
    if args.len() != SEED_LEN {
        eprintln!("Usage: rpgme encode <nine trait values in seed order>");
        return Err(format!("expected {} values, got {}", SEED_LEN, args.len()).into());
    }
    let mut values = [0u8; SEED_LEN];
    for (field, raw) in TraitField::ALL.iter().zip(args) {
        values[field.index()] = raw
            .parse()
            .map_err(|_| format!("{} must be a number from 0 to 255, got '{}'", field, raw))?;
    }
    let traits = TraitVector::from_values(values);
    if !traits.is_single_digit() {
        eprintln!("  Warning: values above 9 produce a seed that will not decode");
    }
    println!("{}", rpgme_core::encode(&traits));
    Ok(())
}

fn cmd_decode(args: &[String], config: &CustomizerConfig) -> CmdResult {
    let arg = args.first().ok_or("missing <query-or-seed>")?;
    let decoded = Character::from_query(&params_from_arg(arg), config);
    println!("  {}", decoded.character.summary());
    println!("  Outcome: {}", serde_json::to_string(&decoded.outcome)?);
    println!("{}", serde_json::to_string_pretty(&decoded.character)?);
    Ok(())
}

fn cmd_link(args: &[String], config: &CustomizerConfig) -> CmdResult {
    let character = load_character(args, config)?;
    let path = args.get(1).map(|s| s.as_str()).unwrap_or(DEFAULT_PATH);
    println!("{}", ShareLink::build(path, &character));
    Ok(())
}

fn cmd_set(args: &[String], config: &CustomizerConfig) -> CmdResult {
    if args.len() < 3 {
        eprintln!("Usage: rpgme set <query-or-seed> <field> <value> [path]");
        return Err("missing arguments".into());
    }
    let character = load_character(args, config)?;
    let update = FieldUpdate::from_input(&args[1], &args[2], config)?;
    let next = character.apply(update);
    let path = args.get(3).map(|s| s.as_str()).unwrap_or(DEFAULT_PATH);
    println!("  {}", next.summary());
    println!("{}", ShareLink::build(path, &next));
    Ok(())
}

fn cmd_random(args: &[String], config: &CustomizerConfig) -> CmdResult {
    let traits = TraitVector::random(&config.bounds, &mut rand::thread_rng())?;
    let defaults = Character::from_config(config);
    let character = Character { flags: defaults.flags, ..Character::from_traits(traits) };
    let path = args.first().map(|s| s.as_str()).unwrap_or(DEFAULT_PATH);
    println!("  {}", character.summary());
    println!("{}", ShareLink::build(path, &character));
    Ok(())
}

fn cmd_attrs(args: &[String], config: &CustomizerConfig) -> CmdResult {
    let character = load_character(args, config)?;
    for (name, value) in character.render_attributes() {
        println!("  {}=\"{}\"", name, value);
    }
    Ok(())
}
