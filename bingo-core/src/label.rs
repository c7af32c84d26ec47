use crate::{
    constants::{NUMBERS_PER_LETTER, POOL_SIZE},
    number::BallNumber,
    state::State,
};

use derive_more::Display;

/// The column a number belongs to on a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Letter {
    B,
    I,
    N,
    G,
    O,
}

const LETTERS: [Letter; 5] = [Letter::B, Letter::I, Letter::N, Letter::G, Letter::O];

pub fn letter_for(number: BallNumber) -> Letter {
    let column = (number.get() - 1) / NUMBERS_PER_LETTER;
    LETTERS[column as usize]
}

// e.g. `B07`, `N42`
pub fn label_for(number: BallNumber) -> String {
    format!("{}{:02}", letter_for(number), number.get())
}

pub fn called_count(state: &State) -> usize {
    POOL_SIZE - state.remaining().len()
}

pub fn progress_line(state: &State) -> String {
    format!("{}/{} called this round", called_count(state), POOL_SIZE)
}

#[cfg(test)]
mod test {
    use super::*;

    fn letter(raw: u8) -> Letter {
        letter_for(BallNumber::new(raw).unwrap())
    }

    #[test]
    fn test_letter_boundaries() {
        assert_eq!(letter(1), Letter::B);
        assert_eq!(letter(15), Letter::B);
        assert_eq!(letter(16), Letter::I);
        assert_eq!(letter(30), Letter::I);
        assert_eq!(letter(31), Letter::N);
        assert_eq!(letter(45), Letter::N);
        assert_eq!(letter(46), Letter::G);
        assert_eq!(letter(60), Letter::G);
        assert_eq!(letter(61), Letter::O);
        assert_eq!(letter(75), Letter::O);
    }

    #[test]
    fn test_label_is_zero_padded() {
        assert_eq!(label_for(BallNumber::new(7).unwrap()), "B07");
        assert_eq!(label_for(BallNumber::new(42).unwrap()), "N42");
        assert_eq!(label_for(BallNumber::new(75).unwrap()), "O75");
    }

    #[test]
    fn test_called_count_on_fresh_state() {
        let state = State::fresh();

        assert_eq!(called_count(&state), 0);
        assert_eq!(progress_line(&state), "0/75 called this round");
    }
}
