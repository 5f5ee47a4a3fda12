//! Topic filter storage and matching
//!
//! This module provides the prefix tree that associates MQTT topic filters
//! with values and enumerates the filters matching a published topic name.

// Submodules
pub mod error;
pub mod topic_match;
pub(crate) mod topic_node;
pub mod topic_trie;


pub use error::{TopicTrieError, TrieResult};
pub use topic_match::TopicMatches;
pub use topic_node::{
	LEVEL_SEPARATOR, MULTI_LEVEL_WILDCARD, RESERVED_TOPIC_PREFIX,
	SINGLE_LEVEL_WILDCARD,
};
pub use topic_trie::TopicTrie;
