//! Configuration for topic trie matching

use crate::topic::topic_node::RESERVED_TOPIC_PREFIX;

/// Matching behaviour settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherSettings {
	/// Topics starting with this character are not matched by wildcards in
	/// the first filter level (`$SYS/...` style broker topics). `None`
	/// disables the exemption.
	pub reserved_prefix: Option<char>,
}

impl Default for MatcherSettings {
	fn default() -> Self {
		Self {
			reserved_prefix: Some(RESERVED_TOPIC_PREFIX),
		}
	}
}

impl MatcherSettings {
	/// Settings that let wildcards match every topic, reserved or not
	pub fn without_reserved_prefix() -> Self {
		Self {
			reserved_prefix: None,
		}
	}

	/// Sets the reserved topic prefix character
	pub fn set_reserved_prefix(&mut self, prefix: Option<char>) -> &mut Self {
		self.reserved_prefix = prefix;
		self
	}
}
