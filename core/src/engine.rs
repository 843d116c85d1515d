// core/src/engine.rs
//
// Decomposition engine: walks the word trie and the digit string together and
// reports every way the digits can be read as dictionary words, literal
// unmapped digits and single skipped digits.

use std::convert::Infallible;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use crate::utils::clean_phone;
use crate::{Config, KeypadMapping, NodeId, Result, WordTrie};

/// Character placed between words and literal digit runs.
pub const WORD_SEPARATOR: char = '-';

/// Marks buffer positions not written on the current path.
const FILLER: char = ' ';

/// Phone number to word-sequence engine.
///
/// The trie and keypad are immutable and shared through `Arc`, so an engine is
/// cheap to clone and can be used from several threads at once. Every call to
/// [`Engine::matches`] owns its own scratch buffer.
///
/// # Example
/// ```
/// use phoneword_core::Engine;
///
/// let engine = Engine::from_words(["call", "me"]);
/// let found = engine.collect_matches("225563");
/// assert!(found.contains(&"CALL-ME".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    trie: Arc<WordTrie>,
    keypad: Arc<KeypadMapping>,
}

impl Engine {
    /// Construct an engine from a loaded trie and a keypad layout.
    pub fn new(trie: WordTrie, keypad: KeypadMapping) -> Self {
        tracing::debug!(
            words = trie.len(),
            nodes = trie.node_count(),
            "engine ready"
        );
        Self {
            trie: Arc::new(trie),
            keypad: Arc::new(keypad),
        }
    }

    /// Build an engine over raw words with the standard keypad.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(WordTrie::from_words(words), KeypadMapping::standard())
    }

    /// Load the dictionary from a reader, using the keypad from `config`.
    pub fn from_reader<R: BufRead>(reader: R, config: &Config) -> Result<Self> {
        let keypad = config.keypad_mapping()?;
        let trie = WordTrie::from_reader(reader)?;
        Ok(Self::new(trie, keypad))
    }

    /// Load the dictionary file at `path`, using the keypad from `config`.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        let keypad = config.keypad_mapping()?;
        let trie = WordTrie::from_path(path)?;
        Ok(Self::new(trie, keypad))
    }

    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    pub fn keypad(&self) -> &KeypadMapping {
        &self.keypad
    }

    /// Enumerate every decomposition of `phone`.
    ///
    /// Characters other than ASCII digits and `.` are discarded first; if
    /// nothing is left the call does nothing. Otherwise `consumer` is called
    /// once per decomposition in depth-first order, without deduplication.
    /// The first error returned by `consumer` stops the search and is
    /// returned as is. On success the number of decompositions is returned.
    pub fn matches<F, E>(&self, phone: &str, mut consumer: F) -> std::result::Result<usize, E>
    where
        F: FnMut(&str) -> std::result::Result<(), E>,
    {
        let cleaned = clean_phone(phone);
        if cleaned.is_empty() {
            return Ok(0);
        }

        let digits: Vec<char> = cleaned.chars().collect();
        let mut search = Search {
            trie: &self.trie,
            keypad: &self.keypad,
            digits: &digits,
            buffer: SearchBuffer::for_digits(digits.len()),
            consumer: &mut consumer,
            emitted: 0,
        };
        search.start_word(0, 0, true)?;

        tracing::debug!(phone = %cleaned, decompositions = search.emitted, "search finished");
        Ok(search.emitted)
    }

    /// Collect every decomposition of `phone` into a vector.
    pub fn collect_matches(&self, phone: &str) -> Vec<String> {
        let mut found = Vec::new();
        let _ = self.matches(phone, |word| {
            found.push(word.to_string());
            Ok::<(), Infallible>(())
        });
        found
    }
}

/// Scratch output for one search: letters, separators and literal digits
/// committed on the current path. Positions past the write index are stale.
struct SearchBuffer {
    slots: Vec<char>,
}

impl SearchBuffer {
    /// Every digit yields at most one character plus one separator.
    fn for_digits(count: usize) -> Self {
        Self {
            slots: vec![FILLER; count * 2],
        }
    }

    fn put(&mut self, pos: usize, c: char) {
        if pos >= self.slots.len() {
            self.slots.resize(pos + 1, FILLER);
        }
        self.slots[pos] = c;
    }

    /// Write a separator unless nothing has been written yet. Returns the
    /// next write position.
    fn separate(&mut self, pos: usize) -> usize {
        if pos == 0 {
            return pos;
        }
        self.put(pos, WORD_SEPARATOR);
        pos + 1
    }

    fn blank_from(&mut self, pos: usize) {
        if pos < self.slots.len() {
            self.slots[pos..].fill(FILLER);
        }
    }

    fn render(&self, end: usize) -> String {
        let text: String = self.slots[..end.min(self.slots.len())].iter().collect();
        text.trim().to_string()
    }
}

/// State of one `matches` call.
///
/// `digit` is the read position in `digits`, `pos` the write position in
/// `buffer`. Each method returns whether at least one decomposition was
/// emitted below it.
struct Search<'a, E> {
    trie: &'a WordTrie,
    keypad: &'a KeypadMapping,
    digits: &'a [char],
    buffer: SearchBuffer,
    consumer: &'a mut dyn FnMut(&str) -> std::result::Result<(), E>,
    emitted: usize,
}

impl<'a, E> Search<'a, E> {
    fn emit(&mut self, end: usize) -> std::result::Result<(), E> {
        let decomposition = self.buffer.render(end);
        self.emitted += 1;
        (self.consumer)(&decomposition)
    }

    fn is_mapped(&self, digit: usize) -> bool {
        self.keypad.is_mapped(self.digits[digit])
    }

    /// Copy a run of unmapped digits through literally, then branch on the
    /// first mapped digit. A run reaching the end of input is emitted as is.
    fn start_word(
        &mut self,
        mut digit: usize,
        mut pos: usize,
        allow_skip: bool,
    ) -> std::result::Result<bool, E> {
        if !self.is_mapped(digit) {
            pos = self.buffer.separate(pos);
            while !self.is_mapped(digit) {
                self.buffer.put(pos, self.digits[digit]);
                digit += 1;
                pos += 1;
                if digit == self.digits.len() {
                    self.emit(pos)?;
                    return Ok(true);
                }
            }
        }
        self.start_word_branches(digit, pos, allow_skip)
    }

    /// Fork at a word boundary: match the digit against the trie root, and,
    /// when allowed, also give the digit up and keep it literally. After a
    /// skip another skip is refused until a trie letter is committed.
    fn start_word_branches(
        &mut self,
        digit: usize,
        pos: usize,
        allow_skip: bool,
    ) -> std::result::Result<bool, E> {
        let pos = self.buffer.separate(pos);
        let found = self.match_letters(self.trie.root(), digit, pos)?;

        if allow_skip {
            self.buffer.put(pos, self.digits[digit]);
            let (digit, pos) = (digit + 1, pos + 1);
            if digit < self.digits.len() {
                self.start_word(digit, pos, false)?;
            } else {
                self.emit(pos)?;
            }
        }

        Ok(found)
    }

    /// Try each letter of the digit against one trie level.
    fn match_letters(
        &mut self,
        level: Option<NodeId>,
        digit: usize,
        pos: usize,
    ) -> std::result::Result<bool, E> {
        let (trie, keypad) = (self.trie, self.keypad);
        let mut found = false;
        for node in trie.child_for(level, self.digits[digit], keypad) {
            if self.match_node(node, digit, pos)? {
                found = true;
            }
        }
        Ok(found)
    }

    /// Commit the node's letter and continue from it.
    ///
    /// On a word end with digits left, both extend the word through `mid`
    /// and start a new word. Committing a letter re-enables the skip branch.
    fn match_node(
        &mut self,
        id: NodeId,
        digit: usize,
        pos: usize,
    ) -> std::result::Result<bool, E> {
        let node = self.trie.node(id);
        let (value, mid, is_word_end) = (node.value, node.mid, node.is_word_end);
        self.buffer.put(pos, value);

        let has_more = digit + 1 < self.digits.len();
        let found = match (is_word_end, has_more) {
            (true, true) => {
                let same_word = self.match_letters(mid, digit + 1, pos + 1)?;
                let next_word = self.start_word(digit + 1, pos + 1, true)?;
                same_word || next_word
            }
            (true, false) => {
                self.emit(pos + 1)?;
                true
            }
            (false, true) => self.match_letters(mid, digit + 1, pos + 1)?,
            (false, false) => false,
        };

        self.buffer.blank_from(pos);
        Ok(found)
    }
}
