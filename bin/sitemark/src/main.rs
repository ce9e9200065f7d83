//! Sitemark CLI
//!
//! One-shot SEO artifact generator: scans a static-site directory tree and
//! writes `sitemap.xml` and `robots.txt`.
//!
//! This is the binary entry point. The command implementations are in
//! `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use sitemark::cmd::generate::Target;

/// Command-line interface for Sitemark.
#[derive(Parser)]
#[command(
    name = "sitemark",
    version,
    about = "SEO sitemap and robots.txt generator for static sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "seo.toml")]
    config: std::path::PathBuf,

    /// Project root to scan and write artifacts into
    #[arg(short, long, default_value = ".")]
    root: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands. With no subcommand, both artifacts are generated.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate sitemap.xml and robots.txt
    Generate,
    /// Generate only sitemap.xml
    Sitemap,
    /// Generate only robots.txt
    Robots,
    /// Validate configuration without writing anything
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitemark::init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => sitemark::cmd::generate::run(&cli.config, &cli.root, Target::All)?,
        Commands::Sitemap => sitemark::cmd::generate::run(&cli.config, &cli.root, Target::Sitemap)?,
        Commands::Robots => sitemark::cmd::generate::run(&cli.config, &cli.root, Target::Robots)?,
        Commands::Check { strict } => sitemark::cmd::check::run(&cli.config, &cli.root, strict)?,
        Commands::Init { force } => sitemark::cmd::init::run(&cli.config, force)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_defaults_to_generate_all() {
        let args = ["sitemark"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("seo.toml"));
        assert_eq!(cli.root, std::path::PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_generate_command_parsing() {
        let args = ["sitemark", "--root", "site", "generate"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.root, std::path::PathBuf::from("site"));
        assert!(matches!(cli.command, Some(Commands::Generate)));
    }

    #[test]
    fn test_cli_sitemap_command_parsing() {
        let args = ["sitemark", "sitemap"];
        let cli = Cli::parse_from(args);

        assert!(matches!(cli.command, Some(Commands::Sitemap)));
    }

    #[test]
    fn test_cli_robots_command_parsing() {
        let args = ["sitemark", "robots"];
        let cli = Cli::parse_from(args);

        assert!(matches!(cli.command, Some(Commands::Robots)));
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["sitemark", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Some(Commands::Check { strict }) => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_init_command_parsing() {
        let args = ["sitemark", "--config", "site/seo.toml", "init", "--force"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("site/seo.toml"));
        match cli.command {
            Some(Commands::Init { force }) => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["sitemark", "-vvv", "generate"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }
}
