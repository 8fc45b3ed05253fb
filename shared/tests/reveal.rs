use shared::{Observation, Visibility};

const THRESHOLD: f64 = 0.12;

#[test]
fn reveals_at_threshold() {
    let hidden = Visibility::Hidden;

    assert_eq!(
        hidden.observe(Observation::new(true, 0.05), THRESHOLD),
        Visibility::Hidden
    );
    assert_eq!(
        hidden.observe(Observation::new(true, 0.12), THRESHOLD),
        Visibility::Visible
    );
    assert_eq!(
        hidden.observe(Observation::new(false, 0.0), THRESHOLD),
        Visibility::Hidden
    );
}

#[test]
fn fully_visible_on_first_report() {
    assert!(Visibility::default()
        .observe(Observation::new(true, 1.0), THRESHOLD)
        .is_visible());
}

#[test]
fn reveal_is_monotonic() {
    let visible = Visibility::Hidden
        .observe(Observation::new(true, 0.5), THRESHOLD)
        .observe(Observation::new(false, 0.0), THRESHOLD)
        .observe(Observation::new(true, 0.5), THRESHOLD);

    assert_eq!(visible, Visibility::Visible);
    assert_eq!(
        Visibility::from_marker(true).observe(Observation::new(false, 0.0), THRESHOLD),
        Visibility::Visible
    );
}

#[test]
fn oversized_element_stays_hidden_below_threshold() {
    // A section ten viewports tall never shows more than a tenth of itself.
    let hidden = Visibility::Hidden
        .observe(Observation::new(true, 0.1), THRESHOLD)
        .observe(Observation::new(true, 0.1), THRESHOLD);

    assert_eq!(hidden, Visibility::Hidden);
}
