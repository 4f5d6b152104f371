//! KeySquare: the 5×5 letter grid behind the digraph ciphers.
//!
//! A square is filled row-major with the distinct letters of a seed key
//! followed by the rest of the alphabet. `J` never occupies a cell, which
//! leaves exactly 25 letters for 25 cells. Each square also keeps a reverse
//! index from letter to `(row, column)` so lookups are constant time.

use crate::error::{CipherError, Result};
use crate::utils::alphabet::{letter_index, ALPHABET, ALPHABET_SIZE};

/// Side length of a key square.
pub const SQUARE_SIZE: usize = 5;

/// How a seed key's `J` is treated while building a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JPolicy {
    /// `J` is read as `I` (Four-Square).
    Merge,
    /// `J` is discarded (Pair).
    Drop,
}

/// A 5×5 grid holding every letter `A–Z` except `J` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    // ASCII letters, row-major
    cells: [[u8; SQUARE_SIZE]; SQUARE_SIZE],
    // Row-major cell index per alphabet letter
    positions: [Option<u8>; ALPHABET_SIZE],
}

impl KeySquare {
    /// Builds the square for `seed`.
    ///
    /// The seed is uppercased and stripped of non-letters; `J` is handled
    /// according to `policy`; duplicates keep their first occurrence. An
    /// empty seed yields the plain alphabet square.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::utils::square::{JPolicy, KeySquare};
    ///
    /// let square = KeySquare::build("PLAYFAIR EXAMPLE", JPolicy::Drop);
    /// assert_eq!(square.row(0), ['P', 'L', 'A', 'Y', 'F']);
    /// assert_eq!(square.position('E').unwrap(), (1, 2));
    /// ```
    pub fn build(seed: &str, policy: JPolicy) -> Self {
        let seed_letters = seed.chars().filter_map(|c| {
            let c = c.to_ascii_uppercase();
            match (c, policy) {
                ('J', JPolicy::Drop) => None,
                ('J', JPolicy::Merge) => Some('I'),
                (c, _) if c.is_ascii_uppercase() => Some(c),
                _ => None,
            }
        });
        let filler = ALPHABET.chars().filter(|&c| c != 'J');

        let mut cells = [[b' '; SQUARE_SIZE]; SQUARE_SIZE];
        let mut positions = [None; ALPHABET_SIZE];
        let mut filled = 0;
        for c in seed_letters.chain(filler) {
            if filled == SQUARE_SIZE * SQUARE_SIZE {
                break;
            }
            // Only uppercase ASCII reaches this point
            let idx = (c as u8 - b'A') as usize;
            if positions[idx].is_some() {
                continue;
            }
            cells[filled / SQUARE_SIZE][filled % SQUARE_SIZE] = c as u8;
            positions[idx] = Some(filled as u8);
            filled += 1;
        }

        KeySquare { cells, positions }
    }

    /// Returns the letter at `(row, col)`, both taken modulo 5.
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row % SQUARE_SIZE][col % SQUARE_SIZE] as char
    }

    /// Returns one row of the square.
    pub fn row(&self, row: usize) -> [char; SQUARE_SIZE] {
        self.cells[row % SQUARE_SIZE].map(char::from)
    }

    /// Locates `letter` in the square.
    ///
    /// # Errors
    /// Returns [`CipherError::CharacterNotFound`] for `J`, lowercase letters
    /// and non-letters: callers normalize text before lookup.
    pub fn position(&self, letter: char) -> Result<(usize, usize)> {
        if !letter.is_ascii_uppercase() {
            return Err(CipherError::CharacterNotFound(letter));
        }
        letter_index(letter)
            .and_then(|idx| self.positions[idx])
            .map(|cell| (cell as usize / SQUARE_SIZE, cell as usize % SQUARE_SIZE))
            .ok_or(CipherError::CharacterNotFound(letter))
    }

    /// Returns the 25 letters in row-major order.
    pub fn letters(&self) -> String {
        self.cells.iter().flatten().map(|&b| b as char).collect()
    }
}
