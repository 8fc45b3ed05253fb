use crate::PageSettings;

/// The bounding box of an element, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Bounds {
    /// Instantiates a new [`Bounds`].
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Bounds {
        Bounds {
            left,
            top,
            width,
            height,
        }
    }

    /// Offset of `pointer` from the center, as fractions of the width and height.
    ///
    /// Inside the box both components lie within `-0.5..=0.5`. A degenerate box yields no offset.
    pub fn relative_offset(&self, pointer: (f64, f64)) -> (f64, f64) {
        let fraction = |delta: f64, extent: f64| {
            if extent > 0.0 {
                delta / extent - 0.5
            } else {
                0.0
            }
        };

        (
            fraction(pointer.0 - self.left, self.width),
            fraction(pointer.1 - self.top, self.height),
        )
    }
}

/// A perspective rotation, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Perspective distance in pixels.
    pub perspective: f64,
    /// Rotation around the horizontal axis.
    pub rotate_x: f64,
    /// Rotation around the vertical axis.
    pub rotate_y: f64,
}

impl Tilt {
    /// Computes the rotation for `pointer` over `bounds`.
    ///
    /// The horizontal offset drives the Y rotation and the vertical offset drives the X rotation with an
    /// inverted sign, so the element leans toward the pointer.
    pub fn at(bounds: &Bounds, pointer: (f64, f64), settings: &PageSettings) -> Tilt {
        let (x, y) = bounds.relative_offset(pointer);

        Tilt {
            perspective: settings.tilt_perspective,
            rotate_x: -y * settings.tilt_scale_x,
            rotate_y: x * settings.tilt_scale_y,
        }
    }

    /// The CSS `transform` value.
    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            css_number(self.perspective),
            css_number(self.rotate_x),
            css_number(self.rotate_y)
        )
    }
}

/// Formats like a script engine would, without a sign on zero.
fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::css_number;

    #[test]
    fn negative_zero_is_unsigned() {
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(0.0), "0");
        assert_eq!(css_number(-1.5), "-1.5");
        assert_eq!(css_number(600.0), "600");
    }
}
