//! # MQTT Topic Trie
//!
//! Topic filter matching for MQTT-style publish/subscribe clients.
//!
//! A [`TopicTrie`] stores values (subscription handles, callbacks, channel
//! senders) under topic filters and, for a concrete topic name, lazily
//! enumerates the values of every filter that matches it.
//!
//! ## Pattern Matching
//!
//! - `+` matches a single topic level (e.g., `sensors/+/temperature`)
//! - `#` matches all remaining levels, including none (e.g., `sensors/#`
//!   matches `sensors` and `sensors/kitchen/temperature`)
//! - Topics starting with `$` are not matched by wildcards in the first
//!   filter level, so `#` does not receive `$SYS/...` broker topics
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_trie::TopicTrie;
//!
//! let mut subscriptions = TopicTrie::new();
//!
//! // SUBSCRIBE
//! subscriptions.set("sensors/+/temperature", "thermostat");
//! subscriptions.set("$SYS/#", "monitor");
//!
//! // PUBLISH dispatch
//! let handlers: Vec<_> =
//!     subscriptions.iter_match("sensors/kitchen/temperature").collect();
//! assert_eq!(handlers, vec![&"thermostat"]);
//!
//! // UNSUBSCRIBE
//! subscriptions.delete("sensors/+/temperature")?;
//! assert_eq!(subscriptions.iter_match("sensors/kitchen/temperature").count(), 0);
//! # Ok::<(), mqtt_topic_trie::TopicTrieError>(())
//! ```
//!
//! For hosts dispatching from several threads, [`SharedTopicTrie`] wraps
//! the trie in a single mutex.

#![warn(missing_docs)]

pub mod config;
pub mod shared;
pub mod topic;

pub use config::MatcherSettings;
pub use shared::SharedTopicTrie;
pub use topic::{TopicMatches, TopicTrie, TopicTrieError, TrieResult};

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_topic_trie::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		MatcherSettings, SharedTopicTrie, TopicTrie, TopicTrieError,
		TrieResult,
	};
}
