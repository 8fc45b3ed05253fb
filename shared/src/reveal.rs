/// Class added to an element once it has been revealed.
pub const REVEAL_MARKER: &str = "visible";

/// One intersection report for an observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Whether any part of the element intersects the viewport.
    pub intersecting: bool,
    /// Visible fraction of the element, in `0.0..=1.0`.
    pub ratio: f64,
}

impl Observation {
    /// Instantiates a new [`Observation`].
    pub fn new(intersecting: bool, ratio: f64) -> Observation {
        Observation {
            intersecting,
            ratio,
        }
    }
}

/// Reveal state of a single element. Once [`Visibility::Visible`] it never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Not yet scrolled into view.
    #[default]
    Hidden,
    /// Revealed.
    Visible,
}

impl Visibility {
    /// Maps the presence of [`REVEAL_MARKER`] to a state.
    pub fn from_marker(marked: bool) -> Visibility {
        if marked {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    /// Applies an observation, revealing the element once at least `threshold` of it intersects the viewport.
    ///
    /// An element more than `1 / threshold` times the viewport height can never reach the threshold and stays
    /// hidden; mark such elements visible up front or lower the threshold.
    pub fn observe(self, observation: Observation, threshold: f64) -> Visibility {
        match self {
            Visibility::Visible => Visibility::Visible,
            Visibility::Hidden if observation.intersecting && observation.ratio >= threshold => {
                Visibility::Visible
            }
            Visibility::Hidden => Visibility::Hidden,
        }
    }

    /// Whether the element is revealed.
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}
