//! to-arel CLI
//!
//! Command-line tool translating PostgreSQL parse trees into Arel-style
//! query trees.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use to_arel_core::{DEFAULT_MAX_DEPTH, SelectManager, TranslateError, Translator, TranslatorConfig};

/// Translate PostgreSQL parse trees into query-expression trees.
#[derive(Parser)]
#[command(name = "to-arel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum parse-tree nesting depth.
    #[arg(long, env = "TO_AREL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the result on a single line.
    #[arg(long, global = true)]
    compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate the first statement of a parser result.
    Translate {
        /// JSON parse tree (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Translate a single SELECT statement node.
    Statement {
        /// JSON statement node (stdin if not specified).
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = TranslatorConfig::new().with_max_depth(cli.max_depth);
    let mut translator = Translator::with_config(config);
    debug!("Nesting limit is {}", translator.config().max_depth);

    let manager = match cli.command {
        Commands::Translate { file } => {
            let tree = read_json(file.as_deref())?;
            translator
                .translate_tree(&tree)
                .map_err(|err| describe(&err))?
        }
        Commands::Statement { file } => {
            let statement = read_json(file.as_deref())?;
            translator
                .manager_from_statement(&statement)
                .map_err(|err| describe(&err))?
        }
    };

    println!("{}", render(&manager, cli.compact)?);
    Ok(())
}

/// Reads a JSON document from `path`, or from stdin when no path is given.
fn read_json(path: Option<&Path>) -> anyhow::Result<Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };
    debug!("Read {} bytes of input", text.len());
    serde_json::from_str(&text).context("input is not valid JSON")
}

fn render(manager: &SelectManager, compact: bool) -> anyhow::Result<String> {
    let output = if compact {
        serde_json::to_string(manager)?
    } else {
        serde_json::to_string_pretty(manager)?
    };
    Ok(output)
}

fn describe(err: &TranslateError) -> anyhow::Error {
    anyhow!("{}: {}", err.kind(), err.detail())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TREE: &str = r#"[{"RawStmt": {"stmt": {"SelectStmt": {
        "targetList": [{"ResTarget": {"val": {"ColumnRef": {"fields": [{"A_Star": {}}]}}}}],
        "fromClause": [{"RangeVar": {"relname": "users", "inh": true}}]
    }}}}]"#;

    #[test]
    fn test_read_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TREE.as_bytes()).unwrap();

        let tree = read_json(Some(file.path())).unwrap();
        let manager = Translator::new().translate_tree(&tree).unwrap();
        assert_eq!(manager.source().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_read_json_reports_bad_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"SELECT 1").unwrap();
        let err = read_json(Some(file.path())).unwrap_err();
        assert_eq!(err.to_string(), "input is not valid JSON");

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = read_json(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_render_modes() {
        let tree: Value = serde_json::from_str(TREE).unwrap();
        let manager = Translator::new().translate_tree(&tree).unwrap();

        let compact = render(&manager, true).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = render(&manager, false).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn test_errors_carry_kind() {
        let err = Translator::new()
            .manager_from_statement(&serde_json::json!({"DeleteStmt": {}}))
            .unwrap_err();
        assert_eq!(
            describe(&err).to_string(),
            "unsupported_statement_kind: unsupported statement kind `DeleteStmt`"
        );
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = ["to-arel", "--max-depth", "8", "translate", "tree.json", "--compact"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.max_depth, 8);
        assert!(cli.compact);
        assert!(matches!(cli.command, Commands::Translate { file: Some(_) }));

        let cli = Cli::try_parse_from(["to-arel", "statement"]).unwrap();
        assert!(matches!(cli.command, Commands::Statement { file: None }));
    }
}
