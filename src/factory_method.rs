//! Pattern 1: Factory Method
//!
//! A factory produces 2D game objects. Every object owns a sprite and a
//! collider and exposes its own area and perimeter; the caller only ever sees
//! `Box<dyn GameObject>`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::CreationError;

// =============================================================================
// Components
// =============================================================================

pub trait Sprite {
    fn draw(&self) -> String;
}

pub trait Collider {
    fn collide(&self) -> String;
}

pub struct BasicSprite;

impl Sprite for BasicSprite {
    fn draw(&self) -> String {
        "Drawing a basic sprite...".to_string()
    }
}

pub struct BasicCollider;

impl Collider for BasicCollider {
    fn collide(&self) -> String {
        "Colliding basic collider...".to_string()
    }
}

/// The sprite/collider pair every shape carries.
struct Components {
    sprite: Box<dyn Sprite>,
    collider: Box<dyn Collider>,
}

impl Components {
    fn basic() -> Self {
        Components {
            sprite: Box::new(BasicSprite),
            collider: Box::new(BasicCollider),
        }
    }
}

// =============================================================================
// Products
// =============================================================================

pub trait GameObject {
    fn kind(&self) -> ObjectType;
    fn draw(&self) -> String;
    fn collide(&self) -> String;
    fn area(&self) -> f64;
    /// Circumference for round shapes.
    fn perimeter(&self) -> f64;
}

pub struct Circle {
    components: Components,
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle {
            components: Components::basic(),
            radius,
        }
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl GameObject for Circle {
    fn kind(&self) -> ObjectType {
        ObjectType::Circle
    }

    fn draw(&self) -> String {
        self.components.sprite.draw()
    }

    fn collide(&self) -> String {
        self.components.collider.collide()
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        self.circumference()
    }
}

pub struct Square {
    components: Components,
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Square {
            components: Components::basic(),
            side,
        }
    }
}

impl GameObject for Square {
    fn kind(&self) -> ObjectType {
        ObjectType::Square
    }

    fn draw(&self) -> String {
        self.components.sprite.draw()
    }

    fn collide(&self) -> String {
        self.components.collider.collide()
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }
}

pub struct Rectangle {
    components: Components,
    length: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(length: f64, height: f64) -> Self {
        Rectangle {
            components: Components::basic(),
            length,
            height,
        }
    }
}

impl GameObject for Rectangle {
    fn kind(&self) -> ObjectType {
        ObjectType::Rectangle
    }

    fn draw(&self) -> String {
        self.components.sprite.draw()
    }

    fn collide(&self) -> String {
        self.components.collider.collide()
    }

    fn area(&self) -> f64 {
        self.length * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.height)
    }
}

pub struct Triangle {
    components: Components,
    side: f64,
}

impl Triangle {
    pub fn new(side: f64) -> Self {
        Triangle {
            components: Components::basic(),
            side,
        }
    }
}

impl GameObject for Triangle {
    fn kind(&self) -> ObjectType {
        ObjectType::Triangle
    }

    fn draw(&self) -> String {
        self.components.sprite.draw()
    }

    fn collide(&self) -> String {
        self.components.collider.collide()
    }

    // NOTE: the side is not squared, so this is not the equilateral area
    // (√3/4 · s²). Kept as the documented behavior of this example.
    fn area(&self) -> f64 {
        3f64.sqrt() * 0.5 * self.side
    }

    fn perimeter(&self) -> f64 {
        3.0 * self.side
    }
}

/// A rectangle capped by two half-circles whose diameter is the height.
pub struct Obround {
    components: Components,
    length: f64,
    height: f64,
}

impl Obround {
    pub fn new(length: f64, height: f64) -> Result<Self, CreationError> {
        if length < height {
            return Err(CreationError::invalid_argument(
                ObjectType::Obround.to_string(),
                "Length cannot be less than height for an obround",
            ));
        }

        Ok(Obround {
            components: Components::basic(),
            length,
            height,
        })
    }

    fn straight(&self) -> f64 {
        self.length - self.height
    }
}

impl GameObject for Obround {
    fn kind(&self) -> ObjectType {
        ObjectType::Obround
    }

    fn draw(&self) -> String {
        self.components.sprite.draw()
    }

    fn collide(&self) -> String {
        self.components.collider.collide()
    }

    fn area(&self) -> f64 {
        let radius = self.height / 2.0;
        PI * radius * radius + self.straight() * self.height
    }

    fn perimeter(&self) -> f64 {
        PI * self.height + 2.0 * self.straight()
    }
}

// =============================================================================
// Discriminator
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Obround,
}

impl ObjectType {
    pub const ALL: [ObjectType; 5] = [
        ObjectType::Circle,
        ObjectType::Square,
        ObjectType::Rectangle,
        ObjectType::Triangle,
        ObjectType::Obround,
    ];
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectType::Circle => "Circle",
            ObjectType::Square => "Square",
            ObjectType::Rectangle => "Rectangle",
            ObjectType::Triangle => "Triangle",
            ObjectType::Obround => "Obround",
        };
        f.write_str(name)
    }
}

impl FromStr for ObjectType {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ObjectType::Circle),
            "square" => Ok(ObjectType::Square),
            "rectangle" => Ok(ObjectType::Rectangle),
            "triangle" => Ok(ObjectType::Triangle),
            "obround" => Ok(ObjectType::Obround),
            _ => Err(CreationError::UnknownShape(s.to_string())),
        }
    }
}

/// Size parameters handed to the factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimensions {
    Single(f64),
    Pair(f64, f64),
}

impl Dimensions {
    pub fn arity(&self) -> usize {
        match self {
            Dimensions::Single(_) => 1,
            Dimensions::Pair(_, _) => 2,
        }
    }
}

impl From<f64> for Dimensions {
    fn from(size: f64) -> Self {
        Dimensions::Single(size)
    }
}

impl From<(f64, f64)> for Dimensions {
    fn from((first, second): (f64, f64)) -> Self {
        Dimensions::Pair(first, second)
    }
}

// =============================================================================
// Creator
// =============================================================================

pub struct GameObjectFactory;

impl GameObjectFactory {
    /// Build a shape from its kind and size parameters.
    ///
    /// Circle, Square and Triangle take one size; Rectangle and Obround take
    /// (length, height). Any other pairing is `UnsupportedShape`.
    pub fn create_object(
        kind: ObjectType,
        dims: impl Into<Dimensions>,
    ) -> Result<Box<dyn GameObject>, CreationError> {
        let dims = dims.into();

        let object: Box<dyn GameObject> = match (kind, dims) {
            (ObjectType::Circle, Dimensions::Single(radius)) => Box::new(Circle::new(radius)),
            (ObjectType::Square, Dimensions::Single(side)) => Box::new(Square::new(side)),
            (ObjectType::Triangle, Dimensions::Single(side)) => Box::new(Triangle::new(side)),
            (ObjectType::Rectangle, Dimensions::Pair(length, height)) => {
                Box::new(Rectangle::new(length, height))
            }
            (ObjectType::Obround, Dimensions::Pair(length, height)) => {
                Box::new(Obround::new(length, height)?)
            }
            (kind, dims) => {
                return Err(CreationError::UnsupportedShape {
                    kind: kind.to_string(),
                    arity: dims.arity(),
                })
            }
        };

        debug!(kind = %kind, ?dims, "created game object");
        Ok(object)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_circle_of_radius_five() {
        let circle = GameObjectFactory::create_object(ObjectType::Circle, 5.0).unwrap();
        assert_eq!(circle.kind(), ObjectType::Circle);
        assert_close(circle.area(), PI * 25.0);
        assert_close(circle.perimeter(), 10.0 * PI);
        assert!((circle.area() - 78.54).abs() < 0.01);
        assert!((circle.perimeter() - 31.42).abs() < 0.01);
    }

    #[test]
    fn test_square_rectangle_triangle_formulas() {
        let square = GameObjectFactory::create_object(ObjectType::Square, 5.0).unwrap();
        assert_close(square.area(), 25.0);
        assert_close(square.perimeter(), 20.0);

        let rectangle = GameObjectFactory::create_object(ObjectType::Rectangle, (10.0, 2.0)).unwrap();
        assert_close(rectangle.area(), 20.0);
        assert_close(rectangle.perimeter(), 24.0);

        let triangle = GameObjectFactory::create_object(ObjectType::Triangle, 5.0).unwrap();
        assert_close(triangle.area(), 3f64.sqrt() / 2.0 * 5.0);
        assert_close(triangle.perimeter(), 15.0);
    }

    #[test]
    fn test_obround_accepts_length_at_least_height() {
        let obround = GameObjectFactory::create_object(ObjectType::Obround, (9.0, 2.0)).unwrap();
        assert_close(obround.area(), PI + 7.0 * 2.0);
        assert_close(obround.perimeter(), 2.0 * PI + 14.0);

        // A zero-length middle section is a circle.
        let round = GameObjectFactory::create_object(ObjectType::Obround, (4.0, 4.0)).unwrap();
        assert_close(round.area(), PI * 4.0);
        assert_close(round.perimeter(), PI * 4.0);
    }

    #[test]
    fn test_obround_rejects_length_below_height() {
        let result = GameObjectFactory::create_object(ObjectType::Obround, (2.0, 9.0));
        match result {
            Err(CreationError::InvalidArgument { shape, reason }) => {
                assert_eq!(shape, "Obround");
                assert!(reason.contains("Length cannot be less than height"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("obround with length < height must fail"),
        }
    }

    #[test]
    fn test_unlisted_arity_is_unsupported() {
        let cases: [(ObjectType, Dimensions); 5] = [
            (ObjectType::Rectangle, Dimensions::Single(3.0)),
            (ObjectType::Obround, Dimensions::Single(3.0)),
            (ObjectType::Circle, Dimensions::Pair(1.0, 2.0)),
            (ObjectType::Square, Dimensions::Pair(1.0, 2.0)),
            (ObjectType::Triangle, Dimensions::Pair(1.0, 2.0)),
        ];

        for (kind, dims) in cases {
            match GameObjectFactory::create_object(kind, dims) {
                Err(CreationError::UnsupportedShape { kind: name, arity }) => {
                    assert_eq!(name, kind.to_string());
                    assert_eq!(arity, dims.arity());
                }
                Err(other) => panic!("unexpected error for {kind}: {other}"),
                Ok(_) => panic!("{kind} with {dims:?} must not be created"),
            }
        }
    }

    #[test]
    fn test_products_delegate_to_components() {
        for kind in [ObjectType::Circle, ObjectType::Square, ObjectType::Triangle] {
            let object = GameObjectFactory::create_object(kind, 1.0).unwrap();
            assert_eq!(object.draw(), "Drawing a basic sprite...");
            assert_eq!(object.collide(), "Colliding basic collider...");
        }
    }

    #[test]
    fn test_object_type_from_str() {
        for kind in ObjectType::ALL {
            assert_eq!(kind.to_string().parse::<ObjectType>().unwrap(), kind);
        }
        assert_eq!(" CIRCLE ".parse::<ObjectType>().unwrap(), ObjectType::Circle);
        assert!(matches!(
            "hexagon".parse::<ObjectType>(),
            Err(CreationError::UnknownShape(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_obround_fails_iff_length_below_height(length in 0.0f64..100.0, height in 0.0f64..100.0) {
            let result = GameObjectFactory::create_object(ObjectType::Obround, (length, height));
            prop_assert_eq!(result.is_err(), length < height);
        }

        #[test]
        fn prop_rectangle_matches_closed_form(length in 0.0f64..1e3, height in 0.0f64..1e3) {
            let rectangle = GameObjectFactory::create_object(ObjectType::Rectangle, (length, height)).unwrap();
            prop_assert!((rectangle.area() - length * height).abs() < 1e-6);
            prop_assert!((rectangle.perimeter() - 2.0 * (length + height)).abs() < 1e-6);
        }
    }
}
