use super::*;

#[test]
fn test_max_take_clamps_to_pile() {
    assert_eq!(max_take(0), 0);
    assert_eq!(max_take(1), 1);
    assert_eq!(max_take(2), 2);
    assert_eq!(max_take(3), 3);
    assert_eq!(max_take(4), 3);
    assert_eq!(max_take(INITIAL_STONES), 3);
}

#[test]
fn test_legal_takes_empty_pile() {
    assert_eq!(legal_takes(0).count(), 0);
    assert_eq!(legal_takes(2).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(legal_takes(5).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_apply_take() {
    assert_eq!(apply_take(7, 3), 4);
    assert_eq!(apply_take(2, 2), 0);
    assert_eq!(apply_take(1, 1), 0);
}

#[test]
#[should_panic(expected = "illegal take")]
fn test_apply_take_rejects_oversized_move() {
    apply_take(2, 3);
}

#[test]
#[should_panic(expected = "illegal take")]
fn test_apply_take_rejects_zero() {
    apply_take(5, 0);
}

#[test]
fn test_losing_positions_are_multiples_of_four() {
    for stones in [0u32, 4, 8, 12] {
        assert!(is_losing_position(stones), "{} should be losing", stones);
    }
    for stones in [1u32, 2, 3, 5, 6, 7, 9] {
        assert!(!is_losing_position(stones), "{} should be winning", stones);
    }
}
