//! Lazy wildcard matching over a [`TopicTrie`](super::TopicTrie)

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::topic_node::{
	LEVEL_SEPARATOR, MULTI_LEVEL_WILDCARD, SINGLE_LEVEL_WILDCARD, TopicNode,
};

/// Pending traversal step: a node and the index of the next topic level
type Frame<'a, V> = (&'a TopicNode<V>, usize);

/// Iterator over the values of every filter matching a topic name.
///
/// Created by [`TopicTrie::iter_match`](super::TopicTrie::iter_match).
/// The traversal is depth-first and driven by an explicit frame stack, so
/// nodes are only visited as the iterator is pulled. Dropping it early
/// leaves the trie untouched.
pub struct TopicMatches<'a, 't, V> {
	levels: SmallVec<[&'t str; 8]>,
	/// Wildcards may not match the first level of this topic
	reserved: bool,
	stack: SmallVec<[Frame<'a, V>; 8]>,
	/// Values found at the last visited node, not yet yielded
	ready: SmallVec<[&'a V; 2]>,
}

impl<'a, 't, V> TopicMatches<'a, 't, V> {
	pub(crate) fn new(
		root: &'a TopicNode<V>,
		topic: &'t str,
		reserved_prefix: Option<char>,
	) -> Self {
		let reserved =
			reserved_prefix.is_some_and(|prefix| topic.starts_with(prefix));
		tracing::trace!(topic, reserved, "Matching topic against filters");

		let mut stack = SmallVec::new();
		stack.push((root, 0));
		Self {
			levels: topic.split(LEVEL_SEPARATOR).collect(),
			reserved,
			stack,
			ready: SmallVec::new(),
		}
	}

	fn visit(&mut self, node: &'a TopicNode<V>, index: usize) {
		let wildcards_allowed = !self.reserved || index > 0;

		// A literal `#` as the last topic level reaches the `#` child
		// through the literal branch; skip the wildcard yield for it.
		let mut hash_reached_literally = false;

		match self.levels.get(index) {
			| None => {
				if let Some(value) = &node.content {
					self.ready.push(value);
				}
			}
			| Some(&level) => {
				if let Some(child) = node.children.get(level) {
					self.stack.push((child, index + 1));
					hash_reached_literally = level == MULTI_LEVEL_WILDCARD
						&& index + 1 == self.levels.len();
				}
				// A literal `+` level already visited the `+` child
				if wildcards_allowed && level != SINGLE_LEVEL_WILDCARD {
					if let Some(child) =
						node.children.get(SINGLE_LEVEL_WILDCARD)
					{
						self.stack.push((child, index + 1));
					}
				}
			}
		}

		// `#` covers this level and everything after it
		if wildcards_allowed && !hash_reached_literally {
			if let Some(value) = node
				.children
				.get(MULTI_LEVEL_WILDCARD)
				.and_then(|child| child.content.as_ref())
			{
				self.ready.push(value);
			}
		}
	}
}

impl<'a, V> Iterator for TopicMatches<'a, '_, V> {
	type Item = &'a V;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(value) = self.ready.pop() {
				return Some(value);
			}
			let (node, index) = self.stack.pop()?;
			self.visit(node, index);
		}
	}
}

impl<V> FusedIterator for TopicMatches<'_, '_, V> {}
