//! Key abstraction between input sources and the game
//!
//! Front-ends turn whatever events they receive into a [`GameKey`] through
//! [`IntoGameKey`]; the game never sees a terminal or window event.

/// The three inputs the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Letter(char),
    Backspace,
    Enter,
}

/// Conversion from an external input event into a game key
///
/// `None` means the event has no meaning for the game and is dropped.
pub trait IntoGameKey {
    fn into_game_key(self) -> Option<GameKey>;
}

impl IntoGameKey for GameKey {
    fn into_game_key(self) -> Option<GameKey> {
        Some(self)
    }
}

impl IntoGameKey for char {
    fn into_game_key(self) -> Option<GameKey> {
        match self {
            c if c.is_ascii_alphabetic() => Some(GameKey::Letter(c)),
            '\u{8}' | '\u{7f}' => Some(GameKey::Backspace),
            '\n' | '\r' => Some(GameKey::Enter),
            _ => None,
        }
    }
}

/// Key names as an on-screen keyboard reports them
///
/// A single ASCII letter, `Enter` or `Backspace` (names are case-insensitive).
///
/// # Examples
/// ```
/// use wordle_board::game::{GameKey, IntoGameKey};
///
/// assert_eq!("q".into_game_key(), Some(GameKey::Letter('q')));
/// assert_eq!("enter".into_game_key(), Some(GameKey::Enter));
/// assert_eq!("Shift".into_game_key(), None);
/// ```
impl IntoGameKey for &str {
    fn into_game_key(self) -> Option<GameKey> {
        let mut chars = self.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_ascii_alphabetic().then_some(GameKey::Letter(c));
        }

        if self.eq_ignore_ascii_case("enter") {
            Some(GameKey::Enter)
        } else if self.eq_ignore_ascii_case("backspace") {
            Some(GameKey::Backspace)
        } else {
            None
        }
    }
}

/// Map each character of a typed line to keys, then submit
///
/// Used by line-oriented front-ends that read a whole guess at once.
#[must_use]
pub fn keys_for_line(line: &str) -> Vec<GameKey> {
    line.chars()
        .filter_map(|c| c.is_ascii_alphabetic().then_some(GameKey::Letter(c)))
        .chain(std::iter::once(GameKey::Enter))
        .collect()
}
