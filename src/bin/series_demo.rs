//==============================================================================
// Series Demo - print the first terms and both kinds of sum
//==============================================================================
//
// Run with: cargo run --bin series_demo -- [--terms N] [--epsilon E] [--verbose]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use geometric_series::{create_series, prefix_sum, threshold_sum_counted};
use tracing::{info, Level};

#[derive(Parser, Debug, PartialEq)]
#[command(name = "series_demo")]
#[command(about = "Print terms of 1, 1/2, 1/4, ... and sums of its prefixes")]
struct Cli {
    /// Number of leading terms to print and sum
    #[arg(long, default_value_t = 4)]
    terms: usize,

    /// Stop the threshold sum at the first term at or below this value
    #[arg(long, default_value_t = 0.125)]
    epsilon: f64,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!(terms = cli.terms, epsilon = cli.epsilon, "starting demo");

    println!("{}", "=== First Terms ===".bold());
    for (k, term) in create_series().take(cli.terms).enumerate() {
        println!("  term {:>3}: {}", k, term);
    }

    println!("\n{}", "=== Prefix Sums ===".bold());
    for num in 0..=cli.terms {
        println!("  first {:>3} terms: {}", num, prefix_sum(num));
    }

    println!("\n{}", "=== Threshold Sum ===".bold());
    let outcome = threshold_sum_counted(cli.epsilon)
        .with_context(|| format!("cannot sum until below {}", cli.epsilon))?;
    println!(
        "  until a term <= {}: {} ({} terms, last {})",
        cli.epsilon,
        outcome.sum.to_string().green(),
        outcome.terms,
        outcome.last_term
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["series_demo"]).unwrap();
        assert_eq!(
            cli,
            Cli {
                terms: 4,
                epsilon: 0.125,
                verbose: false
            }
        );
    }

    #[test]
    fn test_all_flags() {
        let cli =
            Cli::try_parse_from(["series_demo", "--terms", "8", "--epsilon", "0.01", "-v"]).unwrap();
        assert_eq!(cli.terms, 8);
        assert_eq!(cli.epsilon, 0.01);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_value() {
        assert!(Cli::try_parse_from(["series_demo", "--terms"]).is_err());
    }

    #[test]
    fn test_bad_number() {
        let err = Cli::try_parse_from(["series_demo", "--epsilon", "tiny"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_flag() {
        let err = Cli::try_parse_from(["series_demo", "--ratio", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_negative_terms_rejected() {
        assert!(Cli::try_parse_from(["series_demo", "--terms", "-2"]).is_err());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
