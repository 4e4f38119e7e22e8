//! Brute Forge - exhaustive password recovery demo harness
//!
//! Drives known plaintexts through digest -> search -> compare for each
//! selected traversal strategy, or recovers the preimage of an arbitrary
//! hex digest supplied with --target.

use brute_forge::{
    oracle, Alphabet, BruteForgeError, DigestOracle, Result, SearchConfig, SearchOutcome, Strategy,
};
use rand::Rng;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if options.help {
        print_help();
        return;
    }

    match run(&options) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    }
}

/// Parsed command line options
struct Options {
    help: bool,
    strategies: Vec<Strategy>,
    digest: String,
    alphabet: Alphabet,
    max_len: usize,
    target: Option<Vec<u8>>,
    random: bool,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self> {
        let mut options = Options {
            help: false,
            strategies: Strategy::ALL.to_vec(),
            digest: "md5".to_string(),
            alphabet: Alphabet::demo(),
            max_len: 5,
            target: None,
            random: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => options.help = true,
                "--random" => options.random = true,
                "--strategy" => {
                    let value = value_for(&mut iter, "--strategy")?;
                    options.strategies = if value == "all" {
                        Strategy::ALL.to_vec()
                    } else {
                        vec![value.parse()?]
                    };
                }
                "--digest" => options.digest = value_for(&mut iter, "--digest")?,
                "--alphabet" => {
                    options.alphabet = value_for(&mut iter, "--alphabet")?.parse()?;
                }
                "--max-len" => {
                    let value = value_for(&mut iter, "--max-len")?;
                    options.max_len = value.parse().map_err(|_| {
                        BruteForgeError::parse("--max-len expects a non-negative integer", Some(value))
                    })?;
                }
                "--target" => {
                    let value = value_for(&mut iter, "--target")?;
                    let digest = hex::decode(&value).map_err(|e| {
                        BruteForgeError::parse(format!("invalid hex digest: {}", e), Some(value))
                    })?;
                    options.target = Some(digest);
                }
                other => {
                    return Err(BruteForgeError::cli(format!("unknown argument '{}'", other)));
                }
            }
        }

        Ok(options)
    }
}

fn value_for<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| BruteForgeError::cli(format!("{} expects a value", flag)))
}

/// Run the selected mode; returns whether every case passed
fn run(options: &Options) -> Result<bool> {
    println!("🔨 Brute Forge - exhaustive search over bounded password spaces");
    println!("═══════════════════════════════════════════════════════════════");

    let oracle = oracle::from_name(&options.digest)?;
    let config = SearchConfig::new(options.alphabet.clone(), options.max_len);
    println!(
        "Space: alphabet \"{}\", max length {} ({} candidates), digest {}",
        config.alphabet,
        config.max_len,
        config.space_size(),
        oracle.name()
    );
    println!();

    match &options.target {
        Some(target) => run_target(target, &config, oracle.as_ref(), &options.strategies),
        None => run_demo(options, &config, oracle.as_ref()),
    }
}

/// Recover the preimage of a caller-supplied digest
fn run_target(
    target: &[u8],
    config: &SearchConfig,
    oracle: &dyn DigestOracle,
    strategies: &[Strategy],
) -> Result<bool> {
    let mut all_found = true;
    for strategy in strategies {
        let outcome = strategy.search(target, config, oracle);
        match &outcome.candidate {
            Some(candidate) => println!(
                "[{}] recovered \"{}\" for {} ({} digests computed)",
                strategy,
                candidate,
                hex::encode(target),
                outcome.digests_computed
            ),
            None => {
                all_found = false;
                println!(
                    "[{}] space exhausted, no preimage for {} ({} digests computed)",
                    strategy,
                    hex::encode(target),
                    outcome.digests_computed
                );
            }
        }
    }
    Ok(all_found)
}

/// Drive known plaintexts through digest -> search -> compare
fn run_demo(options: &Options, config: &SearchConfig, oracle: &dyn DigestOracle) -> Result<bool> {
    let mut plaintexts = demo_plaintexts(config);
    if options.random {
        plaintexts.push(random_plaintext(config));
    }

    let mut all_passed = true;
    for strategy in &options.strategies {
        println!("── strategy: {}", strategy);
        for plaintext in &plaintexts {
            let target = oracle.digest(plaintext);
            let outcome = strategy.search(&target, config, oracle);
            if !report_case(plaintext, &outcome) {
                all_passed = false;
            }
        }
        println!();
    }

    Ok(all_passed)
}

/// Print one pass/fail line per test plaintext
fn report_case(plaintext: &str, outcome: &SearchOutcome) -> bool {
    let found = outcome.candidate.as_deref().unwrap_or("");
    if found == plaintext {
        println!("Find password: {} - {}", plaintext, found);
        true
    } else {
        println!("Loss: want {}, got {}", plaintext, found);
        false
    }
}

/// The classic demo set: the first single-character candidates of the alphabet
fn demo_plaintexts(config: &SearchConfig) -> Vec<String> {
    config
        .alphabet
        .chars()
        .iter()
        .take(3)
        .map(|c| c.to_string())
        .collect()
}

/// A random in-space plaintext of length 1..=max_len
fn random_plaintext(config: &SearchConfig) -> String {
    let mut rng = rand::thread_rng();
    let chars = config.alphabet.chars();
    let len = rng.gen_range(1..=config.max_len.max(1));
    (0..len).map(|_| chars[rng.gen_range(0..chars.len())]).collect()
}

fn print_help() {
    println!("🔨 Brute Forge - exhaustive password recovery demo");
    println!();
    println!("USAGE:");
    println!("    brute-forge [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --strategy <name>    Traversal: recursive, stack, odometer or all (default: all)");
    println!("    --digest <name>      Digest oracle: md5 or sha256 (default: md5)");
    println!("    --alphabet <chars>   Candidate alphabet in order (default: abcdefg)");
    println!("    --max-len <n>        Maximum candidate length (default: 5)");
    println!("    --target <hex>       Recover the preimage of this digest instead of the demo");
    println!("    --random             Add one randomly drawn plaintext to the demo set");
    println!("    -h, --help           Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    brute-forge");
    println!("    brute-forge --strategy odometer --random");
    println!("    brute-forge --target 0cc175b9c0f1b6a831c399e269772661");
}
