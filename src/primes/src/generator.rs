use derive_more::Display;

/// Outcome of testing a single candidate against the primes found so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[display("prime")]
    Prime,
    /// `divisor` is the first (smallest) known prime that divides the candidate.
    #[display("composite (divisible by {divisor})")]
    Composite { divisor: u64 },
}

/// One step of trial division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("candidate {candidate}: {verdict} after {checks} check(s)")]
pub struct Trial {
    pub candidate: u64,
    /// Number of divisibility checks performed before the verdict was reached.
    pub checks: usize,
    pub verdict: Verdict,
}

/// Incremental trial-division prime generator.
///
/// The list of known primes starts as `[2]` and only ever grows. Every
/// candidate is checked against *all* primes found so far, in the order they
/// were found, stopping at the first one that divides it.
///
/// Also usable as an unbounded [`Iterator`] over the primes in increasing
/// order, starting with the seed `2`.
#[derive(Debug, Clone)]
pub struct PrimeGenerator {
    primes: Vec<u64>,
    candidate: u64,
    yielded: usize,
}

impl PrimeGenerator {
    pub fn new() -> Self {
        PrimeGenerator {
            primes: vec![2],
            candidate: 2,
            yielded: 0,
        }
    }

    /// Tests the next candidate, appending it to the known primes if no known
    /// prime divides it.
    pub fn trial(&mut self) -> Trial {
        self.candidate += 1;
        let candidate = self.candidate;

        let mut checks = 0;
        let mut verdict = Verdict::Prime;
        for &prime in &self.primes {
            checks += 1;
            if candidate % prime == 0 {
                verdict = Verdict::Composite { divisor: prime };
                break;
            }
        }

        if verdict == Verdict::Prime {
            self.primes.push(candidate);
        }

        Trial {
            candidate,
            checks,
            verdict,
        }
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn into_primes(self) -> Vec<u64> {
        self.primes
    }
}

impl Default for PrimeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.yielded >= self.primes.len() {
            self.trial();
        }
        let prime = self.primes[self.yielded];
        self.yielded += 1;
        Some(prime)
    }
}

/// Returns the first `n` primes in increasing order.
pub fn generate(n: usize) -> Vec<u64> {
    generate_with(n, |_| {})
}

/// Like [`generate`], but calls `observe` with every trial performed.
///
/// No trials happen when `n <= 1`: the seed prime alone satisfies the request.
pub fn generate_with(n: usize, mut observe: impl FnMut(&Trial)) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }
    let mut generator = PrimeGenerator::new();
    while generator.len() < n {
        let trial = generator.trial();
        observe(&trial);
    }
    generator.into_primes()
}

/// Naive reference primality check, independent of [`PrimeGenerator`].
pub fn is_prime(value: u64) -> bool {
    value >= 2 && (2..value).all(|divisor| value % divisor != 0)
}
