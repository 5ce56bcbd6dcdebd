use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Trie {
    // Sorted by letter so walks visit children alphabetically.
    next: Vec<(char, Box<Trie>)>,
    finish: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one dictionary word. Words are trimmed and lower-cased; words
    /// containing anything other than ASCII letters can never be played on
    /// the board and are skipped.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_ascii_lowercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return;
        }
        self.insert_chars(&mut word.chars());
    }

    fn insert_chars(&mut self, word: &mut impl Iterator<Item = char>) {
        match word.next() {
            None => self.finish = true,
            Some(c) => match self.next.binary_search_by_key(&c, |(ch, _)| *ch) {
                Ok(pos) => self.next[pos].1.insert_chars(word),
                Err(pos) => {
                    let mut trie = Trie::new();
                    trie.insert_chars(word);
                    self.next.insert(pos, (c, Box::new(trie)));
                }
            },
        }
    }

    pub fn child(&self, c: char) -> Option<&Trie> {
        self.next
            .binary_search_by_key(&c, |(ch, _)| *ch)
            .ok()
            .map(|pos| self.next[pos].1.as_ref())
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &Trie)> + '_ {
        self.next.iter().map(|(c, child)| (*c, child.as_ref()))
    }

    pub fn is_word(&self) -> bool {
        self.finish
    }

    fn walk(&self, word: &str) -> Option<&Trie> {
        word.chars().try_fold(self, |node, c| node.child(c))
    }

    pub fn search(&self, word: &str) -> bool {
        self.walk(word).map(Trie::is_word).unwrap_or(false)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut result = Trie::new();
        let buf = BufReader::new(File::open(path)?);
        for line in buf.lines() {
            result.insert(&line?);
        }
        Ok(result)
    }
}

impl From<Vec<&str>> for Trie {
    fn from(words: Vec<&str>) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert(word)
        }

        result
    }
}

impl From<Vec<String>> for Trie {
    fn from(words: Vec<String>) -> Self {
        let mut result = Trie::new();
        for word in words {
            result.insert(&word)
        }

        result
    }
}

impl From<String> for Trie {
    fn from(text: String) -> Self {
        let mut result = Trie::new();
        for word in text.lines() {
            result.insert(word);
        }
        result
    }
}
