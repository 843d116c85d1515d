//! Ternary search trie over normalized dictionary words.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::utils::normalize_word;
use crate::{KeypadMapping, PhonewordError, Result};

/// Index of a node inside a [`WordTrie`] arena.
pub type NodeId = usize;

/// One character position of the word set.
///
/// `left`/`right` link siblings at the same depth (ordered by `value`),
/// `mid` descends to the next character of the same word.
#[derive(Debug, Clone)]
pub struct TrieNode {
    pub value: char,
    pub left: Option<NodeId>,
    pub mid: Option<NodeId>,
    pub right: Option<NodeId>,
    pub is_word_end: bool,
}

impl TrieNode {
    fn new(value: char) -> Self {
        Self {
            value,
            left: None,
            mid: None,
            right: None,
            is_word_end: false,
        }
    }
}

/// Where a freshly allocated node gets attached.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(NodeId),
    Mid(NodeId),
    Right(NodeId),
}

/// A ternary search trie stored as an arena of nodes.
///
/// Nodes are never removed; the shape depends on insertion order only.
/// Once loaded the trie is read-only and can be shared between threads.
///
/// # Example
/// ```
/// use phoneword_core::trie::WordTrie;
///
/// let mut trie = WordTrie::new();
/// trie.insert("CALL");
/// trie.insert("ME");
///
/// assert!(trie.contains("CALL"));
/// assert!(!trie.contains("CAL"));
/// assert_eq!(trie.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    root: Option<NodeId>,
    words: usize,
}

impl WordTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            words: 0,
        }
    }

    /// Build a trie from raw words, normalizing each one first.
    ///
    /// Words that normalize to the empty string are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            let key = normalize_word(word.as_ref());
            if !key.is_empty() {
                trie.insert(&key);
            }
        }
        trie
    }

    /// Load a dictionary from a line-oriented reader.
    ///
    /// Each line is normalized and inserted when non-empty. Any read error
    /// (including invalid UTF-8) aborts the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut trie = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| PhonewordError::DictionaryRead {
                line: idx + 1,
                source,
            })?;
            let key = normalize_word(&line);
            if key.is_empty() {
                tracing::trace!(line = idx + 1, "skipping empty dictionary line");
                continue;
            }
            trie.insert(&key);
        }
        Ok(trie)
    }

    /// Load a dictionary file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading dictionary");
        let file = File::open(path).map_err(|source| PhonewordError::DictionaryOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let trie = Self::from_reader(BufReader::new(file))?;
        if trie.is_empty() {
            tracing::warn!(path = %path.display(), "dictionary contains no words");
        }
        tracing::info!(
            words = trie.len(),
            nodes = trie.node_count(),
            "dictionary loaded"
        );
        Ok(trie)
    }

    /// Insert an already-normalized word. Empty keys are ignored and
    /// inserting the same word twice has no effect.
    pub fn insert(&mut self, word: &str) {
        let key: Vec<char> = word.chars().collect();
        if key.is_empty() {
            return;
        }

        let mut link = Link::Root;
        let mut depth = 0;
        loop {
            let c = key[depth];
            let id = match self.follow(link) {
                Some(id) => id,
                None => self.attach(link, c),
            };

            let node = &self.nodes[id];
            if c < node.value {
                link = Link::Left(id);
            } else if c > node.value {
                link = Link::Right(id);
            } else if depth + 1 < key.len() {
                link = Link::Mid(id);
                depth += 1;
            } else {
                if !node.is_word_end {
                    self.nodes[id].is_word_end = true;
                    self.words += 1;
                }
                return;
            }
        }
    }

    fn follow(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Left(id) => self.nodes[id].left,
            Link::Mid(id) => self.nodes[id].mid,
            Link::Right(id) => self.nodes[id].right,
        }
    }

    fn attach(&mut self, link: Link, value: char) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TrieNode::new(value));
        match link {
            Link::Root => self.root = Some(id),
            Link::Left(parent) => self.nodes[parent].left = Some(id),
            Link::Mid(parent) => self.nodes[parent].mid = Some(id),
            Link::Right(parent) => self.nodes[parent].right = Some(id),
        }
        id
    }

    /// Root of the first character level, `None` for an empty trie.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Access a node by id.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    /// Find the node holding `letter` within the sibling chain starting at
    /// `start` (one character level).
    pub fn find_sibling(&self, start: Option<NodeId>, letter: char) -> Option<NodeId> {
        let mut current = start;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = if letter < node.value {
                node.left
            } else if letter > node.value {
                node.right
            } else {
                return Some(id);
            };
        }
        None
    }

    /// Nodes of the level starting at `level` that match one of the letters
    /// a digit stands for, in keypad letter order.
    ///
    /// Returns nothing for unmapped digits.
    pub fn child_for<'a>(
        &'a self,
        level: Option<NodeId>,
        digit: char,
        keypad: &'a KeypadMapping,
    ) -> impl Iterator<Item = NodeId> + 'a {
        keypad
            .letters_for(digit)
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&letter| self.find_sibling(level, letter))
    }

    /// Check whether the trie holds exactly `word` (a normalized key).
    pub fn contains(&self, word: &str) -> bool {
        let mut level = self.root;
        let mut chars = word.chars().peekable();
        while let Some(c) = chars.next() {
            let Some(id) = self.find_sibling(level, c) else {
                return false;
            };
            if chars.peek().is_none() {
                return self.nodes[id].is_word_end;
            }
            level = self.nodes[id].mid;
        }
        false
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// True when no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_basic_insert_and_contains() {
        let mut trie = WordTrie::new();
        trie.insert("NI");
        trie.insert("HAO");
        trie.insert("NIHAO");

        assert!(trie.contains("NI"));
        assert!(trie.contains("HAO"));
        assert!(trie.contains("NIHAO"));
        assert!(!trie.contains("N"));
        assert!(!trie.contains("HA"));
        assert!(!trie.contains("NIHA"));
        assert!(!trie.contains(""));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut trie = WordTrie::new();
        trie.insert("DATA");
        let nodes = trie.node_count();
        trie.insert("DATA");
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_shared_prefix_reuses_nodes() {
        let mut trie = WordTrie::new();
        trie.insert("DATA");
        trie.insert("DAUB");
        // D, A shared; T,A and U,B separate
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_sibling_ordering() {
        let mut trie = WordTrie::new();
        for w in ["M", "C", "T", "A"] {
            trie.insert(w);
        }
        let root = trie.root().unwrap();
        assert_eq!(trie.node(root).value, 'M');
        let left = trie.node(root).left.unwrap();
        assert_eq!(trie.node(left).value, 'C');
        assert_eq!(trie.node(trie.node(left).left.unwrap()).value, 'A');
        assert_eq!(trie.node(trie.node(root).right.unwrap()).value, 'T');
        assert_eq!(trie.find_sibling(trie.root(), 'A'), trie.node(left).left);
        assert_eq!(trie.find_sibling(trie.root(), 'B'), None);
    }

    #[test]
    fn test_child_for_follows_keypad_order() {
        let mut trie = WordTrie::new();
        trie.insert("CAT");
        trie.insert("ACT");
        let keypad = KeypadMapping::standard();

        let letters: Vec<char> = trie
            .child_for(trie.root(), '2', &keypad)
            .map(|id| trie.node(id).value)
            .collect();
        assert_eq!(letters, vec!['A', 'C']);

        assert_eq!(trie.child_for(trie.root(), '3', &keypad).count(), 0);
        assert_eq!(trie.child_for(trie.root(), '0', &keypad).count(), 0);
    }

    #[test]
    fn test_from_reader_normalizes_lines() {
        let dict = "meta\n\n  \nDATA\nfala \nJosé\nO'Neil\n";
        let trie = WordTrie::from_reader(Cursor::new(dict)).unwrap();
        assert_eq!(trie.len(), 5);
        assert!(trie.contains("META"));
        assert!(trie.contains("FALA"));
        assert!(trie.contains("JOSE"));
        assert!(trie.contains("ONEIL"));
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"data\n\xff\xfe\n";
        let err = WordTrie::from_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, PhonewordError::DictionaryRead { line: 2, .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let path = std::env::temp_dir().join(format!(
            "phoneword_missing_dict_{}.txt",
            std::process::id()
        ));
        let err = WordTrie::from_path(&path).unwrap_err();
        assert!(matches!(err, PhonewordError::DictionaryOpen { .. }));
    }

    #[test]
    fn test_unicode_keys() {
        let mut trie = WordTrie::new();
        trie.insert("ÅSA");
        trie.insert("ØL");
        assert!(trie.contains("ÅSA"));
        assert!(trie.contains("ØL"));
        assert!(!trie.contains("ASA"));
    }
}
