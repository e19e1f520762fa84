use {
    crate::common::{debug_println, DEBUG},
    clap::Parser,
    primes::{parse_count, Verdict},
    std::{io::Write, sync::atomic::Ordering},
};

/// Print the first N prime numbers
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// How many primes to print
    #[arg(value_parser = parse_count, allow_negative_numbers = true)]
    count: usize,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_println!("{cli:#?}");

    let mut composites = 0;
    let mut stdout = std::io::stdout().lock();
    let found = primes::print_primes_with(cli.count, &mut stdout, |trial| {
        if let Verdict::Composite { .. } = trial.verdict {
            composites += 1;
        }
        debug_println!("{trial}");
    })?;
    stdout.flush()?;

    debug_println!(
        "found {} prime(s), skipped {composites} composite(s)",
        found.len()
    );
    Ok(())
}
