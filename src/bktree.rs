/*!
bktree module

A BK-tree (Burkhard-Keller tree) over items of any type under a caller
supplied integer metric. Every child of a node is keyed by its exact distance
from that node, so a radius search can skip whole subtrees using the triangle
inequality: from a node at distance `d` from the query, only children keyed
in `d - radius ..= d + radius` can hold a match.

There is no removal and no rebalancing. The shape of the tree depends on the
insertion order and on how distances are distributed; a vocabulary where many
items sit at the same distance from each other degenerates into a long chain.
That is inherent to BK-trees and is exercised by the tests below.
*/

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::distance::str_distance;

/// Plain function-pointer distance, the default comparator type.
pub type DistanceFn<T> = fn(&T, &T) -> usize;

struct Node<T> {
    item: T,
    children: HashMap<usize, Node<T>>,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Self {
            item,
            children: HashMap::new(),
        }
    }
}

/// Metric tree keyed by the distance function `D`.
///
/// `D` must behave like a metric (symmetric, zero only on equal items,
/// triangle inequality) for `search` to be complete.
pub struct MetricTree<T, D = DistanceFn<T>> {
    root: Option<Node<T>>,
    distance: D,
    len: usize,
}

impl<T: AsRef<str> + PartialEq> MetricTree<T> {
    /// Create a tree seeded with `root`, using Levenshtein distance.
    pub fn new(root: T) -> Self {
        Self::with_distance(root, str_distance::<T> as DistanceFn<T>)
    }
}

impl<T, D> MetricTree<T, D>
where
    T: PartialEq,
    D: Fn(&T, &T) -> usize,
{
    /// Create a tree seeded with `root` and a custom distance function.
    pub fn with_distance(root: T, distance: D) -> Self {
        Self {
            root: Some(Node::new(root)),
            distance,
            len: 1,
        }
    }

    /// Create a tree with no root. The first insertion becomes the root.
    pub fn empty(distance: D) -> Self {
        Self {
            root: None,
            distance,
            len: 0,
        }
    }

    /// Insert `item`. Returns `false` if an equal item is already stored.
    ///
    /// Walks a single path from the root: at each node the distance picks the
    /// child bucket, and an empty bucket receives the new node.
    pub fn insert(&mut self, item: T) -> bool {
        let Some(mut node) = self.root.as_mut() else {
            self.root = Some(Node::new(item));
            self.len = 1;
            return true;
        };

        loop {
            let d = (self.distance)(&node.item, &item);
            if d == 0 && node.item == item {
                return false;
            }
            match node.children.entry(d) {
                Entry::Occupied(child) => node = child.into_mut(),
                Entry::Vacant(slot) => {
                    slot.insert(Node::new(item));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// All stored items within `radius` of `query`.
    ///
    /// Items are unique in the tree, so the returned vector holds no
    /// duplicates. Order follows the traversal and carries no meaning.
    pub fn search(&self, query: &T, radius: usize) -> Vec<&T> {
        let mut found = Vec::new();
        let Some(root) = self.root.as_ref() else {
            return found;
        };

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let d = (self.distance)(&node.item, query);
            if d <= radius {
                found.push(&node.item);
            }
            let band = d.saturating_sub(radius)..=d.saturating_add(radius);
            stack.extend(
                node.children
                    .iter()
                    .filter(|(key, _)| band.contains(*key))
                    .map(|(_, child)| child),
            );
        }
        found
    }

    /// Whether an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.search(item, 0).into_iter().any(|found| found == item)
    }
}

impl<T, D> MetricTree<T, D> {
    /// Number of distinct items stored, root included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn depth(&self) -> usize {
        let Some(root) = self.root.as_ref() else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root, 1usize)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.values().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Iterate over every stored item in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut stack: Vec<&Node<T>> = self.root.iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(&node.item)
        })
    }
}

impl<T: std::fmt::Debug, D> std::fmt::Debug for MetricTree<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricTree")
            .field("len", &self.len)
            .field("root", &self.root.as_ref().map(|node| &node.item))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::levenshtein;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn syllable_tree() -> MetricTree<String> {
        let mut tree = MetricTree::new("yue".to_string());
        for w in ["yan", "yang", "neng", "an", "van", "wan", "xue", "jue"] {
            tree.insert(w.to_string());
        }
        tree
    }

    fn sorted(found: Vec<&String>) -> Vec<&str> {
        let mut v: Vec<&str> = found.into_iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_insert_and_len() {
        let tree = syllable_tree();
        assert_eq!(tree.len(), 9);
        assert!(!tree.is_empty());
        assert!(tree.contains(&"neng".to_string()));
        assert!(!tree.contains(&"nen".to_string()));
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = syllable_tree();
        let before = tree.len();
        assert!(!tree.insert("yang".to_string()));
        assert!(!tree.insert("yue".to_string()));
        assert_eq!(tree.len(), before);
        assert!(tree.insert("zhuang".to_string()));
        assert_eq!(tree.len(), before + 1);
    }

    #[test]
    fn test_search_radius_one() {
        let tree = syllable_tree();
        assert_eq!(
            sorted(tree.search(&"wan".to_string(), 1)),
            vec!["an", "van", "wan", "yan"]
        );
        assert_eq!(sorted(tree.search(&"a1".to_string(), 1)), vec!["an"]);
        assert!(tree.search(&"qqqqqq".to_string(), 1).is_empty());
    }

    #[test]
    fn test_search_zero_returns_item_itself() {
        let tree = syllable_tree();
        for item in tree.iter() {
            let found = tree.search(item, 0);
            assert_eq!(found, vec![item]);
        }
    }

    #[test]
    fn test_empty_tree() {
        let mut tree: MetricTree<String> = MetricTree::empty(str_distance::<String> as DistanceFn<String>);
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        assert!(tree.search(&"yue".to_string(), 3).is_empty());

        assert!(tree.insert("yue".to_string()));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.search(&"xue".to_string(), 1).len(), 1);
    }

    #[test]
    fn test_unbounded_radius_returns_everything() {
        let tree = syllable_tree();
        let found = tree.search(&"an".to_string(), usize::MAX);
        assert_eq!(found.len(), tree.len());

        let mut two = MetricTree::new("yue".to_string());
        two.insert("yan".to_string());
        assert_eq!(sorted(two.search(&"an".to_string(), usize::MAX)), vec!["yan", "yue"]);
    }

    #[test]
    fn test_custom_distance() {
        let mut tree = MetricTree::with_distance(50i64, |a: &i64, b: &i64| a.abs_diff(*b) as usize);
        for n in [10, 20, 45, 52, 55, 90] {
            tree.insert(n);
        }
        let mut found: Vec<i64> = tree.search(&50, 5).into_iter().copied().collect();
        found.sort_unstable();
        assert_eq!(found, vec![45, 50, 52, 55]);
    }

    #[test]
    fn test_search_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let words: Vec<String> = (0..60)
                .map(|_| {
                    let len = rng.random_range(1..6);
                    (0..len)
                        .map(|_| char::from(b'a' + rng.random_range(0..4u8)))
                        .collect()
                })
                .collect();

            let mut tree = MetricTree::new(words[0].clone());
            for w in &words[1..] {
                tree.insert(w.clone());
            }
            let distinct: BTreeSet<&String> = words.iter().collect();
            assert_eq!(tree.len(), distinct.len());

            for _ in 0..10 {
                let query: String = (0..rng.random_range(0..6))
                    .map(|_| char::from(b'a' + rng.random_range(0..4u8)))
                    .collect();
                let radius = rng.random_range(0..3);

                let expected: BTreeSet<&String> = distinct
                    .iter()
                    .copied()
                    .filter(|w| levenshtein(w, &query) <= radius)
                    .collect();
                let got: BTreeSet<&String> = tree.search(&query, radius).into_iter().collect();
                assert_eq!(got, expected, "query {query:?} radius {radius}");
            }
        }
    }

    #[test]
    fn test_equidistant_items_form_a_chain() {
        // Every single letter is at distance 1 from every other one, so each
        // insertion lands in bucket 1 of the deepest node.
        let letters: Vec<String> = ('a'..='z').map(String::from).collect();
        let mut tree = MetricTree::new(letters[0].clone());
        for l in &letters[1..] {
            assert!(tree.insert(l.clone()));
        }
        assert_eq!(tree.len(), 26);
        assert_eq!(tree.depth(), 26);

        assert_eq!(sorted(tree.search(&"q".to_string(), 0)), vec!["q"]);
        assert_eq!(tree.search(&"q".to_string(), 1).len(), 26);
        assert_eq!(tree.search(&"qq".to_string(), 1), vec![&"q".to_string()]);
    }

    #[test]
    fn test_discrete_metric_deep_chain() {
        let discrete = |a: &u32, b: &u32| usize::from(a != b);
        let mut tree = MetricTree::with_distance(0u32, discrete);
        for n in 1..500 {
            tree.insert(n);
        }
        assert_eq!(tree.len(), 500);
        assert_eq!(tree.depth(), 500);
        assert_eq!(tree.search(&499, 0), vec![&499u32]);
        assert!(tree.contains(&250));
        assert!(!tree.insert(300));
    }
}
