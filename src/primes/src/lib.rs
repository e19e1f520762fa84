pub mod count;
pub mod generator;
pub mod output;

pub use {
    count::{parse_count, CountError},
    generator::{generate, generate_with, is_prime, PrimeGenerator, Trial, Verdict},
    output::{print_primes, print_primes_with, write_primes},
};
