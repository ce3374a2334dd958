//! Mint short-lived overlay/admin JWTs for local testing.
//!
//! Prints a single compact token to stdout; everything else (logs, errors)
//! goes to stderr so the output can be piped directly into a header or URL.

use anyhow::Context;
use clap::{Args, Parser};
use sse_token::{Audience, Key, TokenBuilder};

/// The development signing key: the ASCII bytes of `dev-sse-secret-change-me`.
///
/// Matches the development configuration so freshly minted tokens work
/// against a locally running server out of the box. Not for production.
const DEFAULT_KEY_HEX: &str = "6465762d7373652d7365637265742d6368616e67652d6d65";

#[derive(Parser, Clone)]
#[command(name = "sse-token", about = "Generate overlay/admin JWTs for local testing")]
struct Cli {
	#[command(flatten)]
	log: Log,

	/// Broadcaster ID for the token (JWT `sub`).
	subject: String,

	/// The token audience (JWT `aud`), either `overlay` or `admin`.
	audience: Audience,

	/// HMAC-SHA256 signing key as hex (defaults to dev-sse-secret-change-me).
	#[arg(long, default_value = DEFAULT_KEY_HEX)]
	key_hex: String,

	/// Token lifetime in seconds.
	///
	/// Zero or negative mints an already-expired token, which is handy for
	/// testing rejection paths.
	#[arg(long, default_value_t = 600, allow_negative_numbers = true)]
	ttl: i64,

	/// Optional not-before offset in seconds (added to the current epoch).
	#[arg(long, allow_negative_numbers = true)]
	nbf_offset: Option<i64>,
}

#[derive(Args, Clone)]
struct Log {
	/// The log level, ex. `debug` or `sse_token=trace`.
	#[arg(long = "log", default_value = "warn", env = "RUST_LOG")]
	level: String,
}

impl Log {
	fn init(&self) {
		// Logs go to stderr; stdout carries only the token.
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::new(&self.level))
			.with_writer(std::io::stderr)
			.init();
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	cli.log.init();

	let key = Key::from_hex(&cli.key_hex).context("failed to decode --key-hex")?;

	let mut token = TokenBuilder::new(cli.subject, cli.audience);
	token.ttl = cli.ttl;
	token.not_before = cli.nbf_offset;

	println!("{}", token.sign(&key));

	Ok(())
}
