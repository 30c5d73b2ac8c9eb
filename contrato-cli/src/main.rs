//! Command-line front end for the Colombian contract equivalence calculator.
//!
//! Converts between an indefinite-term salary and the equivalent
//! services-rendered contract rate, printing the full cost or factor
//! breakdown. Contribution ratios default to the current regulatory values
//! and can be overridden per invocation.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use contrato_cli::format::{format_cop, format_factor};
use contrato_cli::input::parse_decimal;
use contrato_core::{BaseSalaryCalculator, ContributionRates, ServiceRateCalculator};

#[derive(Parser, Debug)]
#[command(name = "contrato")]
#[command(version, about = "Equivalences between Colombian contracting modalities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Equivalent services-contract rate for an indefinite-term salary
    ServiceRate {
        /// Monthly base salary in COP (commas allowed, e.g. 2,500,000)
        #[arg(short, long, value_parser = parse_decimal)]
        salary: Decimal,

        #[command(flatten)]
        rates: RateArgs,
    },

    /// Equivalent indefinite-term salary for a services-contract rate
    BaseSalary {
        /// Monthly services-contract rate in COP (commas allowed)
        #[arg(short, long, value_parser = parse_decimal)]
        rate: Decimal,

        #[command(flatten)]
        rates: RateArgs,
    },
}

/// Contribution ratios, defaulting to the current regulatory values.
#[derive(Args, Debug)]
struct RateArgs {
    /// Prestaciones sociales as a fraction of base salary
    #[arg(long, default_value = "0.35", value_parser = parse_decimal)]
    benefits: Decimal,

    /// Health contribution as a fraction of the contribution base
    #[arg(long, default_value = "0.125", value_parser = parse_decimal)]
    health: Decimal,

    /// Pension contribution as a fraction of the contribution base
    #[arg(long, default_value = "0.16", value_parser = parse_decimal)]
    pension: Decimal,

    /// Work-risk contribution as a fraction of the contribution base
    #[arg(long = "work-risk", default_value = "0.01", value_parser = parse_decimal)]
    work_risk: Decimal,
}

impl From<RateArgs> for ContributionRates {
    fn from(args: RateArgs) -> Self {
        Self {
            benefits_ratio: args.benefits,
            health_ratio: args.health,
            pension_ratio: args.pension,
            work_risk_ratio: args.work_risk,
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn print_service_rate(salary: Decimal, rates: ContributionRates) -> Result<()> {
    let quote = ServiceRateCalculator::new(rates)
        .calculate(salary)
        .context("failed to calculate services-contract rate")?;

    println!(
        "Equivalent services-contract rate: {}",
        format_cop(quote.total_rate)
    );
    println!();
    println!("Cost breakdown:");
    println!(
        "  Social security contributions: {}",
        format_cop(quote.social_security_cost)
    );
    println!("    Health:    {}", format_cop(quote.health));
    println!("    Pension:   {}", format_cop(quote.pension));
    println!("    Work risk: {}", format_cop(quote.work_risk));
    println!("  Social benefits: {}", format_cop(quote.benefits_cost));

    Ok(())
}

fn print_base_salary(rate: Decimal, rates: ContributionRates) -> Result<()> {
    let equivalence = BaseSalaryCalculator::new(rates)
        .calculate(rate)
        .context("failed to calculate base salary")?;

    println!(
        "Equivalent base salary: {}",
        format_cop(equivalence.base_salary)
    );
    println!();
    println!("Factor breakdown:");
    println!(
        "  Total factor:           {}",
        format_factor(equivalence.total_factor)
    );
    println!(
        "  Social security factor: {}",
        format_factor(equivalence.social_security_factor)
    );
    println!(
        "  Benefits factor:        {}",
        format_factor(equivalence.benefits_factor)
    );

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::ServiceRate { salary, rates } => print_service_rate(salary, rates.into()),
        Command::BaseSalary { rate, rates } => print_base_salary(rate, rates.into()),
    }
}
