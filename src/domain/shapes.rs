use crate::error::{Result, SolidError};
use serde::Serialize;

/// Behaviour every shape shares. Implementations own their dimensions and
/// never expose setters, so no variant can break another's invariants.
pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

fn positive(label: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SolidError::Validation(format!(
            "{label} must be positive, got {value}"
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: positive("Width", width)?,
            height: positive("Height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns a new rectangle; the receiver is untouched.
    pub fn with_width(&self, width: f64) -> Result<Self> {
        Self::new(width, self.height)
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// A square is its own type with a single side, not a rectangle subtype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        Ok(Self {
            side: positive("Side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
}

pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub shape: String,
    pub area: f64,
    pub perimeter: f64,
}

pub fn summarize(shape: &dyn Shape) -> ShapeSummary {
    ShapeSummary {
        shape: shape.name().to_string(),
        area: shape.area(),
        perimeter: shape.perimeter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area_and_perimeter() {
        let rect = Rectangle::new(4.0, 5.0).unwrap();
        assert_eq!(rect.area(), 20.0);
        assert_eq!(rect.perimeter(), 18.0);
    }

    #[test]
    fn test_square_area_and_perimeter() {
        let square = Square::new(3.0).unwrap();
        assert_eq!(square.area(), 9.0);
        assert_eq!(square.perimeter(), 12.0);
    }

    #[test]
    fn test_non_positive_dimensions_fail_at_construction() {
        assert!(matches!(Square::new(-1.0), Err(SolidError::Validation(_))));
        assert!(matches!(Square::new(0.0), Err(SolidError::Validation(_))));
        assert!(matches!(
            Rectangle::new(2.0, -3.0),
            Err(SolidError::Validation(_))
        ));
        assert!(Rectangle::new(f64::NAN, 1.0).is_err());
        assert!(Square::new(f64::INFINITY).is_err());
    }

    // A square that inherits independent width/height setters would change
    // both sides when only the width is set, so code expecting
    // `area == new_width * old_height` breaks. Here resizing only exists on
    // Rectangle and yields a fresh value.
    #[test]
    fn test_resizing_a_rectangle_keeps_height() {
        let rect = Rectangle::new(2.0, 3.0).unwrap();
        let wider = rect.with_width(5.0).unwrap();
        assert_eq!(wider.area(), 5.0 * rect.height());
        assert_eq!(rect.width(), 2.0);
    }

    #[test]
    fn test_total_area_over_mixed_shapes() {
        let rect = Rectangle::new(2.0, 3.0).unwrap();
        let square = Square::new(2.0).unwrap();
        assert_eq!(total_area(&[&rect, &square]), 10.0);
    }
}
