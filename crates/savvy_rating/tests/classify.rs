use savvy_rating::{classify, classify_match, match_band, rating_band, MatchBand, RatingBand};

#[test]
fn rating_boundaries_are_exact() {
    let cases = [
        (80.0, "Great"),
        (79.0, "Good"),
        (60.0, "Good"),
        (59.0, "OK"),
        (40.0, "OK"),
        (39.0, "Fair"),
        (20.0, "Fair"),
        (19.0, "Poor"),
        (0.0, "Poor"),
        (100.0, "Great"),
    ];
    for (score, label) in cases {
        assert_eq!(classify(score).label, label, "score {score}");
    }
}

#[test]
fn match_boundaries_are_exact() {
    let cases = [
        (90.0, "Excellent match"),
        (89.0, "Great match"),
        (80.0, "Great match"),
        (79.0, "Good match"),
        (60.0, "Good match"),
        (59.0, "Fair match"),
        (40.0, "Fair match"),
        (39.0, "Poor match"),
    ];
    for (score, label) in cases {
        assert_eq!(classify_match(score).label, label, "score {score}");
    }
}

#[test]
fn rating_labels_form_a_closed_set() {
    let allowed = ["Great", "Good", "OK", "Fair", "Poor"];
    for score in -20..=120 {
        let label = classify(score as f32).label;
        assert!(allowed.contains(&label), "unexpected label {label:?}");
    }
}

#[test]
fn rating_is_monotonic_in_score() {
    fn quality(band: RatingBand) -> u8 {
        match band {
            RatingBand::Poor => 0,
            RatingBand::Fair => 1,
            RatingBand::Ok => 2,
            RatingBand::Good => 3,
            RatingBand::Great => 4,
        }
    }
    let mut previous = quality(rating_band(-20.0));
    for score in -19..=120 {
        let current = quality(rating_band(score as f32));
        assert!(current >= previous, "quality dropped at score {score}");
        previous = current;
    }
}

#[test]
fn match_quality_is_monotonic_in_score() {
    fn quality(band: MatchBand) -> u8 {
        match band {
            MatchBand::Poor => 0,
            MatchBand::Fair => 1,
            MatchBand::Good => 2,
            MatchBand::Great => 3,
            MatchBand::Excellent => 4,
        }
    }
    let mut previous = quality(match_band(-20.0));
    for score in -19..=120 {
        let current = quality(match_band(score as f32));
        assert!(current >= previous, "quality dropped at score {score}");
        previous = current;
    }
}

#[test]
fn ladders_stay_independent() {
    // 85 sits in different bands per ladder; labels never cross over.
    assert_eq!(classify(85.0).label, "Great");
    assert_eq!(classify_match(85.0).label, "Great match");
    for score in [-10.0, 0.0, 45.0, 85.0, 95.0] {
        assert!(!classify(score).label.ends_with("match"));
        assert!(classify_match(score).label.ends_with("match"));
    }
}

#[test]
fn each_band_has_a_distinct_palette() {
    let bands = [
        RatingBand::Great,
        RatingBand::Good,
        RatingBand::Ok,
        RatingBand::Fair,
        RatingBand::Poor,
    ];
    for (i, a) in bands.iter().enumerate() {
        for b in &bands[i + 1..] {
            assert_ne!(a.color(), b.color());
            assert_ne!(a.background(), b.background());
        }
    }
}
