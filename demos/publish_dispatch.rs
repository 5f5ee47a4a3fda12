//! Simulated SUBSCRIBE / PUBLISH / UNSUBSCRIBE dispatch through a topic trie
//!
//! ```bash
//! RUST_LOG=debug cargo run --example publish_dispatch
//! ```

use mqtt_topic_trie::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Callback = Box<dyn Fn(&str, &[u8])>;

/// Setup tracing from RUST_LOG, silent when it is not set
fn setup_tracing() {
	if std::env::var("RUST_LOG").is_err() {
		return;
	}
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| "info".into());

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_thread_ids(false)
				.compact(),
		)
		.init();
}

fn callback(name: &'static str) -> Callback {
	Box::new(move |topic, payload| {
		println!(
			"  [{name}] {topic}: {}",
			String::from_utf8_lossy(payload)
		);
	})
}

fn publish(subscriptions: &TopicTrie<Callback>, topic: &str, payload: &[u8]) {
	println!("PUBLISH {topic}");
	let mut delivered = 0;
	for handler in subscriptions.iter_match(topic) {
		handler(topic, payload);
		delivered += 1;
	}
	if delivered == 0 {
		println!("  (no subscribers)");
	}
}

fn subscribe(
	subscriptions: &mut TopicTrie<Callback>,
	filter: &str,
	name: &'static str,
) {
	println!("SUBSCRIBE {filter} -> {name}");
	if subscriptions.set(filter, callback(name)).is_some() {
		println!("  (replaced previous handler)");
	}
}

fn unsubscribe(
	subscriptions: &mut TopicTrie<Callback>,
	filter: &str,
) -> Result<(), TopicTrieError> {
	println!("UNSUBSCRIBE {filter}");
	subscriptions.delete(filter).map(drop)
}

fn main() -> Result<(), TopicTrieError> {
	setup_tracing();

	let mut subscriptions: TopicTrie<Callback> = TopicTrie::new();
	subscribe(&mut subscriptions, "sensors/+/temperature", "thermostat");
	subscribe(&mut subscriptions, "sensors/#", "logger");
	subscribe(&mut subscriptions, "$SYS/#", "broker-monitor");
	subscribe(&mut subscriptions, "#", "catch-all");

	publish(&subscriptions, "sensors/kitchen/temperature", b"21.5");
	publish(&subscriptions, "sensors", b"online");
	publish(&subscriptions, "$SYS/broker/uptime", b"3600");

	unsubscribe(&mut subscriptions, "#")?;
	unsubscribe(&mut subscriptions, "sensors/#")?;
	publish(&subscriptions, "lights/hall", b"on");
	publish(&subscriptions, "sensors/kitchen/temperature", b"21.7");

	if let Err(e) = unsubscribe(&mut subscriptions, "sensors/#") {
		println!("  failed: {e}");
	}

	Ok(())
}
