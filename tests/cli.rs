use {rstest::rstest, std::process::Command};

fn print_primes(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_print_primes"))
        .args(args)
        .output()
        .unwrap()
}

#[rstest]
#[case::missing(&[])]
#[case::extra(&["1", "2"])]
#[case::not_a_number(&["five"])]
#[case::fraction(&["2.5"])]
#[case::negative(&["-3"])]
fn rejected_invocation(#[case] args: &[&str]) {
    let output = print_primes(args);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn negative_count_is_explained() {
    let output = print_primes(&["-3"]);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("count must not be negative"), "{stderr}");
}

#[test]
fn debug_logs_trials_on_stderr() {
    let output = print_primes(&["--debug", "3"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Prime: 2\nPrime: 3\nPrime: 5\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("candidate 4: composite (divisible by 2) after 1 check(s)"),
        "{stderr}"
    );
    assert!(
        stderr.contains("found 3 prime(s), skipped 1 composite(s)"),
        "{stderr}"
    );
}
