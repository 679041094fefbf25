//! Integration tests for top-two ride selection.

use rstest::{fixture, rstest};
use thrillcompass_core::{
    BlendedScorer, Rating, Recommendation, RideCandidate, Scorer, recommend, recommend_with,
};

const TOLERANCE: f32 = 1e-6;

fn rating(value: u8) -> Option<Rating> {
    Rating::new(value).ok()
}

fn best_id(picks: &Recommendation) -> Option<u64> {
    picks.best.as_ref().map(|ride| ride.candidate.id)
}

fn runner_up_id(picks: &Recommendation) -> Option<u64> {
    picks.runner_up.as_ref().map(|ride| ride.candidate.id)
}

#[fixture]
fn all_closed() -> Vec<RideCandidate> {
    vec![
        RideCandidate::closed(1, "Space Mountain", rating(5)),
        RideCandidate::closed(2, "Big Thunder Mountain", None),
    ]
}

#[rstest]
fn empty_list_has_no_recommendation() {
    let picks = recommend(&[]);
    assert!(picks.best.is_none());
    assert!(picks.runner_up.is_none());
}

#[rstest]
fn all_closed_has_no_recommendation(all_closed: Vec<RideCandidate>) {
    assert_eq!(recommend(&all_closed), Recommendation::empty());
}

#[rstest]
fn single_open_ride_is_best_without_runner_up(mut all_closed: Vec<RideCandidate>) {
    all_closed.push(RideCandidate::open(3, "it's a small world", 5, None));
    let picks = recommend(&all_closed);
    assert_eq!(best_id(&picks), Some(3));
    assert_eq!(runner_up_id(&picks), None);
}

#[rstest]
#[case::favourite_first(false)]
#[case::favourite_second(true)]
fn extremes_rank_regardless_of_order(#[case] reversed: bool) {
    let mut rides = vec![
        RideCandidate::open(1, "A", 0, rating(5)),
        RideCandidate::open(2, "B", 120, rating(1)),
    ];
    if reversed {
        rides.reverse();
    }
    let picks = recommend(&rides);
    let best = picks.best.expect("best present");
    let second = picks.runner_up.expect("runner-up present");
    assert_eq!(best.candidate.id, 1);
    assert!((best.score - 1.0).abs() <= TOLERANCE);
    assert_eq!(second.candidate.id, 2);
    assert!((second.score - 0.14).abs() <= TOLERANCE);
}

#[rstest]
fn equal_scores_pick_first_in_input_order() {
    let rides = [
        RideCandidate::open(10, "A", 30, rating(3)),
        RideCandidate::open(20, "B", 30, rating(3)),
    ];
    for _ in 0..5 {
        let picks = recommend(&rides);
        assert_eq!(best_id(&picks), Some(10));
        assert_eq!(runner_up_id(&picks), Some(20));
    }
}

#[rstest]
#[case(0)]
#[case(45)]
#[case(120)]
#[case(400)]
fn missing_rating_scores_as_neutral(#[case] wait: u16) {
    let scorer = BlendedScorer::default();
    let unrated = RideCandidate::open(1, "unrated", wait, None);
    let neutral = RideCandidate::open(1, "unrated", wait, rating(3));
    assert!((scorer.score(&unrated) - scorer.score(&neutral)).abs() <= TOLERANCE);
}

#[rstest]
fn closed_favourite_never_beats_open_ride() {
    let rides = [
        RideCandidate::closed(1, "Favourite", rating(5)),
        RideCandidate::open(2, "Long queue", 300, rating(1)),
    ];
    let picks = recommend_with(&BlendedScorer::default(), &rides);
    assert_eq!(best_id(&picks), Some(2));
    assert_eq!(runner_up_id(&picks), None);
}

#[rstest]
fn runner_up_is_second_highest() {
    let rides = [
        RideCandidate::open(1, "low", 100, rating(1)),
        RideCandidate::open(2, "top", 0, rating(5)),
        RideCandidate::open(3, "mid", 30, rating(4)),
    ];
    let picks = recommend(&rides);
    assert_eq!(best_id(&picks), Some(2));
    assert_eq!(runner_up_id(&picks), Some(3));
}
