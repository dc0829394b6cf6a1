//! mfq - query microformats2 parser output

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mfq::{
    Author, AuthorOptions, Collection, Item, find_by_property, find_by_type, flatten_all,
    get_author, get_representative_card,
};

#[derive(Parser)]
#[command(name = "mfq")]
#[command(version, about = "Query microformats2 parser output", long_about = None)]
#[command(after_help = "EXAMPLES:
    mfq card page.json --url https://jane.example/     Representative h-card
    mfq author page.json                              Author of the first h-entry
    mfq find page.json --type h-card                   All h-cards, flattened
    cat page.json | mfq flatten -                      Flattened item order")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log resolver decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page's representative h-card
    Card {
        /// Parser JSON file, or - for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Canonical URL of the page
        #[arg(long)]
        url: String,
    },
    /// Resolve the author of the first item of a type
    Author {
        /// Parser JSON file, or - for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Type of the item whose author to resolve
        #[arg(long = "type", default_value = "h-entry")]
        type_name: String,

        /// URL of the item (defaults to its own url property)
        #[arg(long)]
        url: Option<String>,

        /// Don't match plain-text authors against card names
        #[arg(long)]
        no_match_name: bool,

        /// Don't fall back to a card on the same hostname
        #[arg(long)]
        no_match_hostname: bool,
    },
    /// Print items matching a type or property value
    Find {
        /// Parser JSON file, or - for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Type tag to match
        #[arg(long = "type", conflicts_with = "property", required_unless_present = "property")]
        type_name: Option<String>,

        /// Property to match, as NAME=VALUE
        #[arg(long)]
        property: Option<String>,

        /// Search only top-level items
        #[arg(long)]
        no_flatten: bool,
    },
    /// Print the flattened item order, one line per item
    Flatten {
        /// Parser JSON file, or - for stdin
        #[arg(value_name = "INPUT")]
        input: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Card { input, url } => {
            let doc = load(&input)?;
            print_json(&get_representative_card(&doc, &url))
        }
        Command::Author {
            input,
            type_name,
            url,
            no_match_name,
            no_match_hostname,
        } => {
            let doc = load(&input)?;
            let item = find_by_type(&doc, &type_name, true)
                .into_iter()
                .next()
                .ok_or_else(|| format!("no {type_name} item found"))?;
            let options = AuthorOptions::new()
                .with_match_name(!no_match_name)
                .with_match_hostname(!no_match_hostname);

            match get_author(item, Some(&doc), url.as_deref(), options) {
                Some(Author::Card(card)) => print_json(card),
                Some(Author::Identifier(id)) => print_json(&id),
                None => print_json(&None::<&Item>),
            }
        }
        Command::Find {
            input,
            type_name,
            property,
            no_flatten,
        } => {
            let doc = load(&input)?;
            let found = match (type_name, property) {
                (Some(type_name), _) => find_by_type(&doc, &type_name, !no_flatten),
                (None, Some(property)) => {
                    let (name, value) = property
                        .split_once('=')
                        .ok_or_else(|| format!("expected NAME=VALUE, got {property:?}"))?;
                    find_by_property(&doc, name, value, !no_flatten)
                }
                (None, None) => return Err("one of --type or --property is required".into()),
            };
            print_json(&found)
        }
        Command::Flatten { input } => {
            let doc = load(&input)?;
            for item in flatten_all(&doc) {
                println!("{}", item.types.join(" "));
            }
            Ok(())
        }
    }
}

fn load(input: &str) -> Result<Collection, String> {
    let text = if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| mfq::Error::from(e).to_string())?;
        text
    } else {
        std::fs::read_to_string(input).map_err(|e| format!("{input}: {}", mfq::Error::from(e)))?
    };
    Collection::from_json_str(&text).map_err(|e| format!("{input}: {e}"))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
