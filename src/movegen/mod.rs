//! Legal move generation.
//!
//! A house is a legal selection when it holds at least one seed.

use rand::Rng;

use crate::board::{Board, House, Side};

/// Returns the side's non-empty houses in ascending order.
pub fn legal_houses(board: &Board, side: Side) -> Vec<House> {
    House::ALL
        .into_iter()
        .filter(|h| board.seeds(h.index_for(side)) != 0)
        .collect()
}

/// Picks a uniformly random legal house, or `None` if the side has no seeds.
pub fn random_house(board: &Board, side: Side, rng: &mut impl Rng) -> Option<House> {
    let legal = legal_houses(board, side);
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.gen_range(0..legal.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn all_houses_legal_at_start() {
        let board = Board::new();
        assert_eq!(legal_houses(&board, Side::A), House::ALL.to_vec());
        assert_eq!(legal_houses(&board, Side::B), House::ALL.to_vec());
    }

    #[test]
    fn empty_houses_are_not_legal() {
        let board = Board::from_counts([0, 2, 0, 0, 1, 0, 9, 0, 0, 0, 0, 0, 0, 36]);
        let legal: Vec<u8> = legal_houses(&board, Side::A)
            .iter()
            .map(|h| h.number())
            .collect();
        assert_eq!(legal, vec![2, 5]);
        assert!(legal_houses(&board, Side::B).is_empty());
    }

    #[test]
    fn random_house_is_always_legal() {
        let board = Board::from_counts([0, 2, 0, 0, 1, 0, 9, 0, 3, 0, 0, 0, 0, 33]);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let h = random_house(&board, Side::A, &mut rng).unwrap();
            assert!(board.seeds(h.index_for(Side::A)) > 0);
        }
        assert_eq!(
            random_house(&board, Side::B, &mut rng),
            House::new(2)
        );
        let empty = Board::from_counts([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]);
        assert_eq!(random_house(&empty, Side::A, &mut rng), None);
    }
}
