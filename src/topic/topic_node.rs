//! Prefix tree node keyed by topic levels

use std::collections::HashMap;

use arcstr::Substr;

/// Filter level matching exactly one topic level
pub const SINGLE_LEVEL_WILDCARD: &str = "+";

/// Filter level matching the remainder of a topic, including nothing
pub const MULTI_LEVEL_WILDCARD: &str = "#";

/// Topic level separator
pub const LEVEL_SEPARATOR: char = '/';

/// First character of broker-reserved topic names
pub const RESERVED_TOPIC_PREFIX: char = '$';

/// Node in the topic trie.
///
/// Wildcard levels are stored as ordinary children under the `+` and `#`
/// keys. A node without content only exists as the ancestor of some
/// registered filter.
#[derive(Debug)]
pub(crate) struct TopicNode<V> {
	/// Children keyed by the next filter level
	pub(crate) children: HashMap<Substr, TopicNode<V>>,

	/// Value of the filter terminating exactly at this node
	pub(crate) content: Option<V>,
}

impl<V> Default for TopicNode<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> TopicNode<V> {
	pub(crate) fn new() -> Self {
		Self {
			children: HashMap::new(),
			content: None,
		}
	}

	/// True when the node carries no value and has no children left
	pub(crate) fn is_empty(&self) -> bool {
		self.content.is_none() && self.children.is_empty()
	}

	/// Walks (and creates as needed) the nodes for `levels`
	pub(crate) fn get_or_create(
		&mut self,
		levels: impl IntoIterator<Item = Substr>,
	) -> &mut TopicNode<V> {
		let mut current_node = self;
		for level in levels {
			current_node = current_node.children.entry(level).or_default();
		}
		current_node
	}

	pub(crate) fn find(&self, levels: &[&str]) -> Option<&TopicNode<V>> {
		levels
			.iter()
			.try_fold(self, |node, level| node.children.get(*level))
	}

	pub(crate) fn find_mut(
		&mut self,
		levels: &[&str],
	) -> Option<&mut TopicNode<V>> {
		let mut current_node = self;
		for level in levels {
			current_node = current_node.children.get_mut(*level)?;
		}
		Some(current_node)
	}

	/// Takes the content at the end of `levels` and prunes every node that
	/// became empty, from the terminal level back towards `self`.
	///
	/// Returns `None` without touching the tree when a level is missing or
	/// the terminal node holds no content. Otherwise returns the removed
	/// value and the number of nodes pruned below `self`.
	pub(crate) fn remove_path(
		&mut self,
		levels: &[&str],
	) -> Option<(V, usize)> {
		let pruned = {
			let mut path: Vec<&TopicNode<V>> =
				Vec::with_capacity(levels.len() + 1);
			path.push(&*self);
			for level in levels {
				let parent = path[path.len() - 1];
				path.push(parent.children.get(*level)?);
			}
			let terminal = path[path.len() - 1];
			terminal.content.as_ref()?;

			// Walk back up while the node would be left empty. Only the
			// terminal node loses its content; ancestors lose one child.
			let mut pruned = 0;
			if !levels.is_empty() && terminal.children.is_empty() {
				pruned = 1;
				for node in path[1 .. levels.len()].iter().rev() {
					if node.content.is_some() || node.children.len() > 1 {
						break;
					}
					pruned += 1;
				}
			}
			pruned
		};

		let value = self.find_mut(levels)?.content.take()?;
		if pruned > 0 {
			let keep = levels.len() - pruned;
			if let Some(parent) = self.find_mut(&levels[.. keep]) {
				parent.children.remove(levels[keep]);
			}
		}
		Some((value, pruned))
	}

	/// Collects `(filter, value)` for every descendant of this node
	pub(crate) fn collect_filters(&self) -> Vec<(String, &V)> {
		let mut result = Vec::new();
		let mut current_path: Vec<&str> = Vec::new();
		let mut stack: Vec<(usize, &str, &TopicNode<V>)> = self
			.children
			.iter()
			.map(|(level, child)| (0, level.as_str(), child))
			.collect();

		while let Some((depth, level, node)) = stack.pop() {
			current_path.truncate(depth);
			current_path.push(level);
			if let Some(value) = &node.content {
				result.push((current_path.join("/"), value));
			}
			stack.extend(
				node.children
					.iter()
					.map(|(level, child)| (depth + 1, level.as_str(), child)),
			);
		}
		result
	}

	/// Number of nodes in this subtree, excluding `self`
	#[cfg(test)]
	pub(crate) fn descendant_count(&self) -> usize {
		let mut count = 0;
		let mut stack: Vec<&TopicNode<V>> = self.children.values().collect();
		while let Some(node) = stack.pop() {
			count += 1;
			stack.extend(node.children.values());
		}
		count
	}
}

// Frees deep subtrees without recursing once per level
impl<V> Drop for TopicNode<V> {
	fn drop(&mut self) {
		let mut pending: Vec<TopicNode<V>> =
			self.children.drain().map(|(_, child)| child).collect();
		while let Some(mut node) = pending.pop() {
			pending.extend(node.children.drain().map(|(_, child)| child));
		}
	}
}
