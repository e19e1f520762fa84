use {
    crate::generator::{generate_with, Trial},
    std::io::{self, Write},
};

/// Writes one `Prime: <value>` line per prime.
pub fn write_primes(primes: &[u64], out: &mut impl Write) -> io::Result<()> {
    for prime in primes {
        writeln!(out, "Prime: {prime}")?;
    }
    out.flush()
}

/// Generates the first `n` primes, writes them to `out` and returns them.
pub fn print_primes(n: usize, out: &mut impl Write) -> io::Result<Vec<u64>> {
    print_primes_with(n, out, |_| {})
}

pub fn print_primes_with(
    n: usize,
    out: &mut impl Write,
    observe: impl FnMut(&Trial),
) -> io::Result<Vec<u64>> {
    let primes = generate_with(n, observe);
    write_primes(&primes, out)?;
    Ok(primes)
}
