//! Lock-guarded trie handle for multi-threaded hosts

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::MatcherSettings;
use crate::topic::{TopicTrie, TrieResult};

/// Cloneable handle to a [`TopicTrie`] behind a single mutex.
///
/// Every operation takes the lock for its whole duration. Matches are
/// consumed while the lock is held, so a match traversal can never observe
/// a concurrent `set` or `delete`.
#[derive(Debug)]
pub struct SharedTopicTrie<V> {
	inner: Arc<Mutex<TopicTrie<V>>>,
}

impl<V> Clone for SharedTopicTrie<V> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<V> Default for SharedTopicTrie<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> From<TopicTrie<V>> for SharedTopicTrie<V> {
	fn from(trie: TopicTrie<V>) -> Self {
		Self {
			inner: Arc::new(Mutex::new(trie)),
		}
	}
}

impl<V> SharedTopicTrie<V> {
	/// Creates an empty shared trie with default settings
	pub fn new() -> Self {
		TopicTrie::new().into()
	}

	/// Creates an empty shared trie with the given settings
	pub fn with_settings(settings: MatcherSettings) -> Self {
		TopicTrie::with_settings(settings).into()
	}

	/// See [`TopicTrie::set`]
	pub fn set(&self, filter: &str, value: V) -> Option<V> {
		self.inner.lock().set(filter, value)
	}

	/// See [`TopicTrie::delete`]
	pub fn delete(&self, filter: &str) -> TrieResult<V> {
		self.inner.lock().delete(filter)
	}

	/// See [`TopicTrie::contains`]
	pub fn contains(&self, filter: &str) -> bool {
		self.inner.lock().contains(filter)
	}

	/// Number of registered filters
	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	/// True when no filter is registered
	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}

	/// Calls `f` for every value whose filter matches `topic`
	pub fn for_each_match<F>(&self, topic: &str, mut f: F)
	where
		F: FnMut(&V),
	{
		let trie = self.inner.lock();
		for value in trie.iter_match(topic) {
			f(value);
		}
	}

	/// Runs `f` with exclusive access to the underlying trie
	pub fn with_trie<R>(&self, f: impl FnOnce(&mut TopicTrie<V>) -> R) -> R {
		f(&mut self.inner.lock())
	}
}

impl<V: Clone> SharedTopicTrie<V> {
	/// See [`TopicTrie::get`]
	pub fn get(&self, filter: &str) -> TrieResult<V> {
		self.inner.lock().get(filter).cloned()
	}

	/// Clones out the values of every filter matching `topic`
	pub fn collect_matches(&self, topic: &str) -> Vec<V> {
		self.inner.lock().iter_match(topic).cloned().collect()
	}
}
