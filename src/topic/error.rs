//! Error types for topic trie operations

use thiserror::Error;

/// Errors returned by [`TopicTrie`](super::TopicTrie) lookups and removals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicTrieError {
	/// No value is registered under the given topic filter
	#[error("Topic filter '{filter}' not found")]
	FilterNotFound {
		/// The filter that was queried
		filter: String,
	},
}

impl TopicTrieError {
	/// Creates a new FilterNotFound error
	pub fn filter_not_found(filter: impl Into<String>) -> Self {
		Self::FilterNotFound {
			filter: filter.into(),
		}
	}

	/// Returns the filter string this error refers to
	pub fn filter(&self) -> &str {
		match self {
			| Self::FilterNotFound { filter } => filter,
		}
	}
}

/// Convenient Result type for trie operations
pub type TrieResult<T> = Result<T, TopicTrieError>;
