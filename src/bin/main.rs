//! # Fraction demonstration
//!
//! Builds a few fractions from the command line and prints every operation on them.
use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, Level};

use rust_fraction::Fraction;

#[derive(Parser, Debug)]
#[clap(version, about = "Exact arithmetic on reduced fractions")]
struct Args {
    /// Numerator and denominator of the first fraction.
    #[clap(long, number_of_values = 2, default_values = &["3", "4"], allow_hyphen_values = true)]
    first: Vec<i64>,
    /// Numerator and denominator of the second fraction.
    #[clap(long, number_of_values = 2, default_values = &["5", "6"], allow_hyphen_values = true)]
    second: Vec<i64>,
    /// Exponent the first fraction is raised to.
    #[clap(long, default_value = "2", allow_hyphen_values = true)]
    exponent: i32,
    /// Numerator and denominator of the fraction whose absolute value is shown.
    #[clap(long, number_of_values = 2, default_values = &["-3", "4"], allow_hyphen_values = true)]
    negative: Vec<i64>,
    /// Log every computed step.
    #[clap(short, long)]
    verbose: bool,
}

fn fraction(parts: &[i64]) -> Result<Fraction> {
    match parts {
        [numerator, denominator] => Ok(Fraction::new(*numerator, *denominator)?),
        _ => anyhow::bail!("expected a numerator and a denominator, got {} values", parts.len()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let f1 = fraction(&args.first)?;
    let f2 = fraction(&args.second)?;
    debug!(%f1, %f2, "parsed operands");

    println!("Fraction 1: {}", f1);
    println!("Fraction 2: {}", f2);

    let sum = f1 + f2;
    println!("Addition: {} + {} = {}", f1, f2, sum);
    println!("Subtraction: {} - {} = {}", f1, f2, f1 - f2);
    println!("Multiplication: {} * {} = {}", f1, f2, f1 * f2);
    println!("Division: {} / {} = {}", f1, f2, f1.try_div(f2)?);
    println!("Power: {}^{} = {}", f1, args.exponent, f1.try_pow(args.exponent)?);
    println!("Mixed number of {}: {}", sum, sum.as_mixed_number());
    println!("{} == {}: {}", f1, f2, f1 == f2);
    println!("Decimal value of {}: {}", f1, f1.to_f64());

    let f3 = fraction(&args.negative)?;
    println!("Absolute value of {}: {}", f3, f3.abs());
    debug!(%f3, "shown absolute value");

    let predicates = [
        ("an integer", f1.is_integer()),
        ("proper", f1.is_proper()),
        ("a unit fraction", f1.is_unit()),
        ("zero", f1.is_zero()),
    ];
    println!(
        "{}",
        predicates
            .iter()
            .map(|(property, holds)| format!("Is {} {}? {}", f1, property, holds))
            .join("\n"),
    );
    println!("Is {} adjacent to {}? {}", f1, f2, f1.is_adjacent_to(&f2));

    Ok(())
}
