//! Topic filter trie

use arcstr::ArcStr;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::error::{TopicTrieError, TrieResult};
use super::topic_match::TopicMatches;
use super::topic_node::{LEVEL_SEPARATOR, TopicNode};
use crate::config::MatcherSettings;

type Levels<'f> = SmallVec<[&'f str; 8]>;

fn split_levels(filter: &str) -> Levels<'_> {
	filter.split(LEVEL_SEPARATOR).collect()
}

/// Prefix tree associating MQTT topic filters with values.
///
/// Filters are split on `/` and stored one level per node, with `+` and `#`
/// kept as ordinary keys. [`iter_match`](Self::iter_match) then walks only
/// the branches a concrete topic name can reach.
///
/// ```
/// use mqtt_topic_trie::TopicTrie;
///
/// let mut trie = TopicTrie::new();
/// trie.set("sensors/+/temperature", 1);
/// trie.set("sensors/#", 2);
///
/// let mut matched: Vec<_> =
/// 	trie.iter_match("sensors/kitchen/temperature").copied().collect();
/// matched.sort();
/// assert_eq!(matched, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct TopicTrie<V> {
	root: TopicNode<V>,
	len: usize,
	settings: MatcherSettings,
}

impl<V> Default for TopicTrie<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> TopicTrie<V> {
	/// Creates an empty trie with default settings
	pub fn new() -> Self {
		Self::with_settings(MatcherSettings::default())
	}

	/// Creates an empty trie with the given settings
	pub fn with_settings(settings: MatcherSettings) -> Self {
		Self {
			root: TopicNode::new(),
			len: 0,
			settings,
		}
	}

	/// Matching settings in effect
	pub fn settings(&self) -> &MatcherSettings {
		&self.settings
	}

	/// Number of registered filters
	pub fn len(&self) -> usize {
		self.len
	}

	/// True when no filter is registered
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Associates `value` with `filter`, returning the value it replaced.
	///
	/// Any string is accepted; empty levels are kept as literal levels.
	pub fn set(&mut self, filter: &str, value: V) -> Option<V> {
		let path = ArcStr::from(filter);
		let levels = path.split(LEVEL_SEPARATOR).map(|s| path.substr_from(s));
		let previous = self.root.get_or_create(levels).content.replace(value);

		if previous.is_none() {
			self.len += 1;
			debug!(filter, "Registered topic filter");
		} else {
			debug!(filter, "Replaced value of topic filter");
		}
		previous
	}

	/// Returns the value registered under exactly `filter`
	pub fn get(&self, filter: &str) -> TrieResult<&V> {
		self.root
			.find(&split_levels(filter))
			.and_then(|node| node.content.as_ref())
			.ok_or_else(|| {
				trace!(filter, "Topic filter lookup missed");
				TopicTrieError::filter_not_found(filter)
			})
	}

	/// Mutable access to the value registered under exactly `filter`
	pub fn get_mut(&mut self, filter: &str) -> TrieResult<&mut V> {
		self.root
			.find_mut(&split_levels(filter))
			.and_then(|node| node.content.as_mut())
			.ok_or_else(|| TopicTrieError::filter_not_found(filter))
	}

	/// True when a value is registered under exactly `filter`
	pub fn contains(&self, filter: &str) -> bool {
		self.get(filter).is_ok()
	}

	/// Removes `filter` and returns its value.
	///
	/// Nodes left without children or content are pruned from the terminal
	/// level back towards the root; levels still shared with other filters
	/// stay. Fails without modifying the trie if `filter` is not registered.
	pub fn delete(&mut self, filter: &str) -> TrieResult<V> {
		let (value, pruned) = self
			.root
			.remove_path(&split_levels(filter))
			.ok_or_else(|| TopicTrieError::filter_not_found(filter))?;
		self.len -= 1;
		debug!(filter, pruned, "Removed topic filter");
		Ok(value)
	}

	/// Removes every filter
	pub fn clear(&mut self) {
		self.root = TopicNode::new();
		self.len = 0;
	}

	/// Lazily yields the values of all filters matching `topic`.
	///
	/// `+` matches one level, `#` matches the remaining levels (zero or
	/// more). Neither matches the first level of a topic starting with the
	/// reserved prefix. Each registered filter is yielded at most once; the
	/// order is unspecified.
	///
	/// Topic levels are compared literally before any wildcard applies, so
	/// a (protocol-invalid) topic `a/#/b` also matches the filter `a/#/b`.
	pub fn iter_match<'a, 't>(
		&'a self,
		topic: &'t str,
	) -> TopicMatches<'a, 't, V> {
		TopicMatches::new(&self.root, topic, self.settings.reserved_prefix)
	}

	/// All registered filters with their values, in unspecified order
	pub fn filters(&self) -> Vec<(String, &V)> {
		self.root.collect_filters()
	}

	#[cfg(test)]
	pub(crate) fn node_count(&self) -> usize {
		self.root.descendant_count()
	}

	#[cfg(test)]
	pub(crate) fn has_node(&self, path: &str) -> bool {
		self.root.find(&split_levels(path)).is_some()
	}
}

impl<V, S: AsRef<str>> Extend<(S, V)> for TopicTrie<V> {
	fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
		for (filter, value) in iter {
			self.set(filter.as_ref(), value);
		}
	}
}

impl<V, S: AsRef<str>> FromIterator<(S, V)> for TopicTrie<V> {
	fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
		let mut trie = Self::new();
		trie.extend(iter);
		trie
	}
}
