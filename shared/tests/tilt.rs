use shared::{Bounds, PageSettings, Tilt};

#[test]
fn center_is_flat() {
    let bounds = Bounds::new(100.0, 50.0, 200.0, 100.0);
    let tilt = Tilt::at(&bounds, (200.0, 100.0), &PageSettings::default());

    assert_eq!(
        tilt.transform(),
        "perspective(600px) rotateX(0deg) rotateY(0deg)"
    );
}

#[test]
fn corners_lean_toward_pointer() {
    let bounds = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let settings = PageSettings::default();

    let top_left = Tilt::at(&bounds, (0.0, 0.0), &settings);
    assert_eq!(top_left.rotate_x, 3.0);
    assert_eq!(top_left.rotate_y, -4.0);

    let bottom_right = Tilt::at(&bounds, (200.0, 100.0), &settings);
    assert_eq!(
        bottom_right.transform(),
        "perspective(600px) rotateX(-3deg) rotateY(4deg)"
    );
}

#[test]
fn degenerate_bounds_are_flat() {
    let tilt = Tilt::at(
        &Bounds::new(10.0, 10.0, 0.0, 0.0),
        (15.0, 15.0),
        &PageSettings::default(),
    );

    assert_eq!(tilt.rotate_x, 0.0);
    assert_eq!(tilt.rotate_y, 0.0);
}
