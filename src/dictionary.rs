use crate::error::{Result, SnowmanError};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_PHRASES: &str = include_str!("resources/phrases.txt");

fn has_letters(phrase: &str) -> bool {
    phrase.chars().any(char::is_alphabetic)
}

fn parse_phrase_line(line: &str) -> Option<String> {
    let phrase = line.trim();
    if phrase.is_empty() || phrase.starts_with('#') {
        return None;
    }
    if !has_letters(phrase) {
        log::warn!("Skipping phrase with nothing to guess: {phrase:?}");
        return None;
    }
    Some(phrase.to_string())
}

pub fn load_phrases_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_phrase_line).collect()
}

pub fn load_phrases_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let to_error = |source| SnowmanError::PhraseFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    let reader = BufReader::new(file);
    let mut phrases = Vec::new();
    for line in reader.lines() {
        if let Some(phrase) = parse_phrase_line(&line.map_err(to_error)?) {
            phrases.push(phrase);
        }
    }
    Ok(phrases)
}

/// Per-user phrase file, picked up when no explicit file is given.
pub fn default_phrases_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snowman").join("phrases.txt"))
}

/// Serves phrases from a fixed catalog in shuffled order without repeating
/// any phrase until every phrase of the current cycle has been drawn.
#[derive(Debug)]
pub struct PhraseDictionary<R = StdRng> {
    first: String,
    rest: Vec<String>,
    pool: Vec<String>,
    rng: R,
}

impl PhraseDictionary<StdRng> {
    pub fn with_seed(catalog: Vec<String>, seed: u64) -> Result<Self> {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng(catalog: Vec<String>) -> Result<Self> {
        Self::new(catalog, StdRng::from_os_rng())
    }
}

impl<R: Rng> PhraseDictionary<R> {
    /// Builds a dictionary over `catalog`. An empty catalog, or a phrase
    /// without a single letter, is a configuration defect and is rejected
    /// here rather than at draw time.
    pub fn new(catalog: Vec<String>, rng: R) -> Result<Self> {
        if let Some(phrase) = catalog.iter().find(|p| !has_letters(p)) {
            return Err(SnowmanError::UnguessablePhrase(phrase.clone()));
        }
        let mut phrases = catalog.into_iter();
        let Some(first) = phrases.next() else {
            return Err(SnowmanError::EmptyCatalog);
        };
        let rest: Vec<String> = phrases.collect();
        info_log!("Phrase dictionary created with {} phrases", rest.len() + 1);
        Ok(Self {
            first,
            rest,
            pool: Vec::new(),
            rng,
        })
    }

    /// Removes and returns the last phrase of the draw pool, reshuffling the
    /// full catalog into the pool first when it has run dry.
    pub fn get_phrase(&mut self) -> String {
        match self.pool.pop() {
            Some(phrase) => phrase,
            None => {
                debug_log!("Draw pool empty, reshuffling {} phrases", self.phrase_count());
                self.refill_and_draw()
            }
        }
    }

    pub fn catalog(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.first.as_str()).chain(self.rest.iter().map(String::as_str))
    }

    pub fn phrase_count(&self) -> usize {
        self.rest.len() + 1
    }

    /// Phrases left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Shuffles a fresh copy of the catalog and draws the phrase that lands in
    /// the last slot; the other phrases become the new pool. The first
    /// Fisher-Yates step settles the last slot, so it is done here and the
    /// remaining steps are a plain `shuffle` of the pool.
    fn refill_and_draw(&mut self) -> String {
        let mut pool = self.rest.clone();
        let mut drawn = self.first.clone();
        let j = self.rng.random_range(0..=pool.len());
        if let Some(slot) = pool.get_mut(j) {
            std::mem::swap(slot, &mut drawn);
        }
        shuffle(&mut pool, &mut self.rng);
        self.pool = pool;
        drawn
    }
}

/// Fisher-Yates: walking from the last slot down, swap each slot with a
/// uniformly chosen slot at or below it.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
