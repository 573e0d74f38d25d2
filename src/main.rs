mod account;
mod rng;
mod utils;

use clap::Parser;
use tracing::{debug, error, info, warn};

use crate::account::PrivateKeyBuilder;
use crate::rng::WebkitRng;
use crate::rng::quality::{self, DigitHistogram};

#[derive(Parser, Debug)]
#[command(
	name = "eth-account-gen",
	about = "Generate nominal Ethereum accounts with the legacy seeded in-browser generator."
)]
struct Args {
	/// Explicit generator seed for reproducible output (32-bit domain)
	#[arg(long)]
	seed: Option<u64>,

	/// Number of accounts to synthesize and print
	#[arg(long, default_value_t = 1)]
	count: usize,

	/// After generating, audit digit uniformity over this many fractions
	#[arg(long, value_name = "FRACTIONS")]
	audit: Option<u64>,
}

fn main() {
	// Initialize tracing subscriber; RUST_LOG overrides the info default.
	// Logs go to stderr so stdout stays a pure JSON stream.
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::from_default_env()
				.add_directive(tracing::Level::INFO.into()),
		)
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_file(false)
		.with_line_number(false)
		.with_timer(tracing_subscriber::fmt::time::time())
		.init();

	let args = Args::parse();

	info!("Starting account generator");
	warn!("Keys come from a weak 32-bit generator; never fund these accounts");

	if args.seed.is_some() && args.count > 1 {
		warn!("An explicit seed reproduces the same key for every account");
	}

	for n in 1..=args.count {
		let account = match args.seed {
			Some(seed) => PrivateKeyBuilder::new().with_seed(seed).build(),
			None => account::generate_account(),
		};

		let account = match account {
			Ok(account) => account,
			Err(e) => {
				error!("Failed to synthesize account {}/{}: {}", n, args.count, e);
				std::process::exit(1);
			}
		};

		debug!(
			"Account {}/{} ready ({} hex digits)",
			n,
			args.count,
			account.private_key.as_str().len()
		);

		match serde_json::to_string(&account) {
			Ok(json) => println!("{}", json),
			Err(e) => {
				error!("Failed to serialize account {}/{}: {}", n, args.count, e);
				std::process::exit(1);
			}
		}
	}

	info!("Synthesized {} account(s)", args.count);

	if let Some(fractions) = args.audit {
		run_digit_audit(args.seed, fractions);
	}
}

/// Samples fractions from a fresh generator and logs a distribution report.
fn run_digit_audit(seed: Option<u64>, fractions: u64) {
	let mut rng = WebkitRng::new();
	match seed {
		Some(seed) => match u32::try_from(seed) {
			Ok(seed) => rng.set_seed(Some(seed)),
			Err(_) => {
				error!(
					"Audit seed {} does not fit the generator's 32-bit domain",
					seed
				);
				std::process::exit(1);
			}
		},
		None => rng.set_seed(None),
	}

	let start_seed = rng.seed();
	info!(
		"Auditing digit distribution of {} fractions from seed {}",
		fractions, start_seed
	);

	let mut histogram = DigitHistogram::new();
	for _ in 0..fractions {
		histogram.record_fraction(rng.next_fraction());
	}

	debug!(
		"Audit state: {} digits across {} fractions, counts {:?}",
		histogram.observed(),
		histogram.samples(),
		histogram.counts()
	);
	histogram.log_report();

	match quality::shortest_cycle(start_seed, fractions) {
		Some(steps) => warn!("Seed state recurred after {} steps", steps),
		None => info!("No seed state recurred within {} steps", fractions),
	}
}
