use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "aurum",
    about = "Aurum: golden-object regression checks",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Golden directory (overrides the config file)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true, default_value = "aurum.toml")]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store a new golden object from a JSON file
    Save(SaveArgs),
    /// List stored golden objects
    List(ListArgs),
    /// Print a stored golden object
    Show(ShowArgs),
    /// Compare a candidate JSON file against a golden object
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct SaveArgs {
    pub name: String,
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct ShowArgs {
    pub name: String,
}

#[derive(Args)]
pub struct CompareArgs {
    pub name: String,
    pub file: PathBuf,
    /// Print the reason on failure
    #[arg(long)]
    pub explain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_save() {
        let cli = Cli::try_parse_from(["aurum", "save", "totals", "out/totals.json"]).unwrap();
        if let Command::Save(args) = cli.command {
            assert_eq!(args.name, "totals");
            assert_eq!(args.file, PathBuf::from("out/totals.json"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["aurum", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
        assert_eq!(cli.config, PathBuf::from("aurum.toml"));
        assert!(cli.root.is_none());
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["aurum", "show", "totals"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.name, "totals");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_compare_explain() {
        let cli = Cli::try_parse_from(["aurum", "compare", "--explain", "totals", "c.json"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert!(args.explain);
            assert_eq!(args.name, "totals");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_root() {
        let cli = Cli::try_parse_from(["aurum", "list", "--root", "golden"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("golden")));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["aurum", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["aurum", "--format", "json", "list"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn save_requires_file() {
        assert!(Cli::try_parse_from(["aurum", "save", "totals"]).is_err());
    }
}
