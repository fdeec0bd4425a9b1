//! Keyboard boundary
//!
//! The platform layer reports the keys held this frame, in a stable order.
//! The simulation only ever sees one letter per frame: the first held key
//! that appears in the alphabet table. Later keys in the same frame are
//! dropped, so chords never type more than one letter.

use serde::{Deserialize, Serialize};

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Enter,
    Space,
    Escape,
    Backspace,
}

/// Starts a session from the title screen and restarts after Over/Won
pub const CONFIRM_KEY: Key = Key::Enter;

/// Alphabet key table, one entry per lowercase letter
pub const KEY_TABLE: [(Key, char); 26] = [
    (Key::A, 'a'),
    (Key::B, 'b'),
    (Key::C, 'c'),
    (Key::D, 'd'),
    (Key::E, 'e'),
    (Key::F, 'f'),
    (Key::G, 'g'),
    (Key::H, 'h'),
    (Key::I, 'i'),
    (Key::J, 'j'),
    (Key::K, 'k'),
    (Key::L, 'l'),
    (Key::M, 'm'),
    (Key::N, 'n'),
    (Key::O, 'o'),
    (Key::P, 'p'),
    (Key::Q, 'q'),
    (Key::R, 'r'),
    (Key::S, 's'),
    (Key::T, 't'),
    (Key::U, 'u'),
    (Key::V, 'v'),
    (Key::W, 'w'),
    (Key::X, 'x'),
    (Key::Y, 'y'),
    (Key::Z, 'z'),
];

impl Key {
    /// Map a typed character to its key (letters are case-folded)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\n' | '\r' => Some(Key::Enter),
            ' ' => Some(Key::Space),
            '\x1b' => Some(Key::Escape),
            '\x08' | '\x7f' => Some(Key::Backspace),
            _ => {
                let c = c.to_ascii_lowercase();
                KEY_TABLE.iter().find(|(_, l)| *l == c).map(|(k, _)| *k)
            }
        }
    }
}

/// Letter for a key, if it is one of the 26 alphabet keys
pub fn letter_for(key: Key) -> Option<char> {
    KEY_TABLE.iter().find(|(k, _)| *k == key).map(|(_, l)| *l)
}

/// The one letter typed this frame: first mapped key in collection order
pub fn sample_letter(pressed: &[Key]) -> Option<char> {
    pressed.iter().find_map(|&k| letter_for(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_alphabet() {
        let letters: String = KEY_TABLE.iter().map(|(_, l)| *l).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
        for (key, letter) in KEY_TABLE {
            assert_eq!(letter_for(key), Some(letter));
            assert_eq!(Key::from_char(letter), Some(key));
        }
    }

    #[test]
    fn test_non_letters_unmapped() {
        assert_eq!(letter_for(Key::Enter), None);
        assert_eq!(letter_for(Key::Space), None);
        assert_eq!(Key::from_char('7'), None);
        assert_eq!(Key::from_char('\n'), Some(Key::Enter));
        assert_eq!(Key::from_char('Q'), Some(Key::Q));
    }

    #[test]
    fn test_first_key_wins() {
        assert_eq!(sample_letter(&[Key::T, Key::A]), Some('t'));
        assert_eq!(sample_letter(&[Key::A, Key::T]), Some('a'));
    }

    #[test]
    fn test_unmapped_keys_skipped() {
        assert_eq!(sample_letter(&[Key::Enter, Key::Space, Key::C]), Some('c'));
        assert_eq!(sample_letter(&[Key::Enter]), None);
        assert_eq!(sample_letter(&[]), None);
    }
}
