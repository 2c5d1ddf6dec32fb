use anyhow::Context;
use clap::{Parser, Subcommand};
use enum_names::EnumNameMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Queries an enum name table stored as JSON")]
struct Cli {
    /// JSON object of integer keys to names, e.g. {"1": "FIRST", "2": "SECOND"}
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the whole table
    Show,
    /// Look up the name of a key
    Name {
        #[arg(allow_hyphen_values = true)]
        key: i64,
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Look up the key of a name
    Key { name: String },
    /// Print a key as its quoted name
    Encode {
        #[arg(allow_hyphen_values = true)]
        key: i64,
    },
    /// Parse a quoted name back to its key
    Decode { text: String },
    /// List keys in ascending order
    Keys,
    /// List names in key order
    Names,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {:?}", cli.input))?;
    let map = load(&input_data).with_context(|| format!("loading {:?}", cli.input))?;

    println!("{}", run(&map, &cli.command)?);
    Ok(())
}

fn load(json: &str) -> anyhow::Result<EnumNameMap<i64>> {
    let table: BTreeMap<i64, String> = serde_json::from_str(json)?;
    tracing::info!(entries = table.len(), "loaded enum table");
    Ok(EnumNameMap::try_new(table)?)
}

fn run(map: &EnumNameMap<i64>, command: &Command) -> anyhow::Result<String> {
    let output = match command {
        Command::Show => map.to_string(),
        Command::Name { key, fallback: Some(fallback) } => map.name_or(*key, fallback).to_string(),
        Command::Name { key, fallback: None } => map
            .name(*key)
            .with_context(|| format!("no name registered for {key}"))?
            .to_string(),
        Command::Key { name } => map
            .key(name)
            .with_context(|| format!("no key registered for '{name}'"))?
            .to_string(),
        Command::Encode { key } => map.encode_name(*key)?,
        Command::Decode { text } => map.decode_name(text)?.to_string(),
        Command::Keys => join_lines(map.keys()),
        Command::Names => join_lines(map.names()),
    };
    Ok(output)
}

fn join_lines<T: ToString>(items: Vec<T>) -> String {
    items.iter().map(T::to_string).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{"-1": "LOW", "0": "MID", "1": "HIGH"}"#;

    #[test]
    fn test_show_and_lookup() {
        let map = load(TABLE).unwrap();

        assert_eq!(run(&map, &Command::Show).unwrap(), "EnumNameMap[-1:LOW 0:MID 1:HIGH]");
        assert_eq!(run(&map, &Command::Name { key: -1, fallback: None }).unwrap(), "LOW");
        assert_eq!(
            run(&map, &Command::Name { key: 9, fallback: Some("?".to_string()) }).unwrap(),
            "?"
        );
        assert!(run(&map, &Command::Name { key: 9, fallback: None }).is_err());
        assert_eq!(run(&map, &Command::Key { name: "HIGH".to_string() }).unwrap(), "1");
        assert_eq!(run(&map, &Command::Keys).unwrap(), "-1\n0\n1");
        assert_eq!(run(&map, &Command::Names).unwrap(), "LOW\nMID\nHIGH");
    }

    #[test]
    fn test_encode_decode() {
        let map = load(TABLE).unwrap();

        assert_eq!(run(&map, &Command::Encode { key: 0 }).unwrap(), r#""MID""#);
        assert_eq!(run(&map, &Command::Decode { text: r#""MID""#.to_string() }).unwrap(), "0");

        let err = run(&map, &Command::Decode { text: r#""NOPE""#.to_string() }).unwrap_err();
        assert!(err.to_string().contains("'LOW', 'MID', 'HIGH'"));
    }

    #[test]
    fn test_malformed_tables_are_errors() {
        assert!(load(r#"{"1": "A", "3": "C"}"#).is_err());
        assert!(load(r#"{"1": "A", "2": "A"}"#).is_err());
        assert!(load(r#"{"one": "A"}"#).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
