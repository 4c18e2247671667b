//! Value types describing the parts of a planar truss.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A pin connection between members.
///
/// Members rotate freely about a joint, so only the net force at a joint has to
/// vanish for equilibrium.
///
/// # Examples
/// ```
/// use trusseq::Joint;
///
/// let joint = Joint::new(1.0, 2.0);
/// assert_eq!(joint.to_string(), "(1 2)");
/// assert_eq!(joint, Joint::new(1.0, 2.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// X position of the joint in metres.
    x: f64,
    /// Y position of the joint in metres.
    y: f64,
}

impl Joint {
    /// Create a joint at `(x, y)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X position of the joint.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y position of the joint.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Move the joint along the X axis.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Move the joint along the Y axis.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Position of the joint as a [`Point`].
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for Joint {
    fn from(value: Point) -> Self {
        Self::new(value.x, value.y)
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}

/// An external force acting on a truss.
///
/// Internal member forces are carried by [`Member`] instead. Directions are measured
/// in degrees counter-clockwise from the positive X axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Magnitude in newtons.
    magnitude: f64,
    /// Direction in degrees.
    direction: f64,
}

impl Force {
    /// Create a force of `magnitude` newtons acting at `direction` degrees.
    #[must_use]
    pub const fn new(magnitude: f64, direction: f64) -> Self {
        Self {
            magnitude,
            direction,
        }
    }

    /// Magnitude in newtons.
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Direction in degrees.
    #[must_use]
    pub const fn direction(&self) -> f64 {
        self.direction
    }

    /// Change the magnitude.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.magnitude = magnitude;
    }

    /// Change the direction.
    pub fn set_direction(&mut self, direction: f64) {
        self.direction = direction;
    }

    /// Component of the force along the X axis.
    ///
    /// # Examples
    /// ```
    /// use trusseq::Force;
    ///
    /// let force = Force::new(10.0, 60.0);
    /// assert!((force.x_component() - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn x_component(&self) -> f64 {
        self.magnitude * self.direction.to_radians().cos()
    }

    /// Component of the force along the Y axis.
    #[must_use]
    pub fn y_component(&self) -> f64 {
        self.magnitude * self.direction.to_radians().sin()
    }

    /// Force as a planar vector of its components.
    #[must_use]
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x_component(), self.y_component())
    }

    /// `1` when the direction points towards positive X, otherwise `-1`.
    ///
    /// Only the direction is considered; the sign of the magnitude is ignored.
    #[must_use]
    pub fn positive_x_direction(&self) -> i8 {
        let angle = self.normalized_direction();
        if angle < 90.0 || angle > 270.0 {
            1
        } else {
            -1
        }
    }

    /// `1` when the direction points towards positive Y, otherwise `-1`.
    ///
    /// Only the direction is considered; the sign of the magnitude is ignored.
    #[must_use]
    pub fn positive_y_direction(&self) -> i8 {
        let angle = self.normalized_direction();
        if angle > 0.0 && angle < 180.0 {
            1
        } else {
            -1
        }
    }

    /// Direction wrapped into `[0, 360)`.
    fn normalized_direction(&self) -> f64 {
        self.direction.rem_euclid(360.0)
    }
}

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Force of {}N at {} degrees",
            self.magnitude, self.direction
        )
    }
}

/// A two-joint member carrying only axial force.
///
/// Positive internal forces are tensile and negative ones compressive.
///
/// # Examples
/// ```
/// use trusseq::{Joint, Member};
///
/// let mut member = Member::new(Joint::new(0.0, 0.0), Joint::new(3.0, 4.0));
/// assert_eq!(member.length(), 5.0);
/// member.set_internal_force(-10.0);
/// assert!(member.in_compression());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// First joint of the member.
    start: Joint,
    /// Second joint of the member.
    end: Joint,
    /// Distance between the joints in metres.
    length: f64,
    /// Axial force in newtons.
    internal_force: f64,
    /// X component of the axial force in newtons.
    internal_force_x: f64,
    /// Y component of the axial force in newtons.
    internal_force_y: f64,
}

impl Member {
    /// Create an unloaded member between two joints.
    #[must_use]
    pub fn new(start: Joint, end: Joint) -> Self {
        Self {
            start,
            end,
            length: start.position().distance(end.position()),
            internal_force: 0.0,
            internal_force_x: 0.0,
            internal_force_y: 0.0,
        }
    }

    /// First joint.
    #[must_use]
    pub const fn start(&self) -> Joint {
        self.start
    }

    /// Second joint.
    #[must_use]
    pub const fn end(&self) -> Joint {
        self.end
    }

    /// Distance between the joints.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Axial force; positive in tension.
    #[must_use]
    pub const fn internal_force(&self) -> f64 {
        self.internal_force
    }

    /// X component of the axial force.
    #[must_use]
    pub const fn internal_force_x(&self) -> f64 {
        self.internal_force_x
    }

    /// Y component of the axial force.
    #[must_use]
    pub const fn internal_force_y(&self) -> f64 {
        self.internal_force_y
    }

    /// Replace the first joint and update the length.
    pub fn set_start(&mut self, joint: Joint) {
        self.start = joint;
        self.length = self.start.position().distance(self.end.position());
    }

    /// Replace the second joint and update the length.
    pub fn set_end(&mut self, joint: Joint) {
        self.end = joint;
        self.length = self.start.position().distance(self.end.position());
    }

    /// Set the axial force.
    pub fn set_internal_force(&mut self, force: f64) {
        self.internal_force = force;
    }

    /// Set the X component of the axial force.
    pub fn set_internal_force_x(&mut self, force: f64) {
        self.internal_force_x = force;
    }

    /// Set the Y component of the axial force.
    pub fn set_internal_force_y(&mut self, force: f64) {
        self.internal_force_y = force;
    }

    /// Set the axial force and resolve it into components along the member axis.
    ///
    /// Components are zero when the member has no length.
    pub fn resolve_internal_force(&mut self, force: f64) {
        let components = self
            .direction()
            .map_or_else(Vector2::zeros, |direction| direction * force);
        self.internal_force = force;
        self.internal_force_x = components.x;
        self.internal_force_y = components.y;
    }

    /// Unit vector from the first joint to the second, if the joints differ.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2<f64>> {
        if self.length == 0.0 {
            return None;
        }
        Some((self.end.position().to_vector() - self.start.position().to_vector()) / self.length)
    }

    /// Whether the member is being squeezed.
    #[must_use]
    pub fn in_compression(&self) -> bool {
        self.internal_force < 0.0
    }

    /// Whether the member is being stretched.
    #[must_use]
    pub fn in_tension(&self) -> bool {
        self.internal_force > 0.0
    }

    /// Whether the member carries no axial force.
    #[must_use]
    pub fn is_zero_force(&self) -> bool {
        self.internal_force == 0.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member {}, {} to {}, {}. Internal Forces:\n X: {}, Y: {}, Total: {}",
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.internal_force_x,
            self.internal_force_y,
            self.internal_force
        )
    }
}

/// How a support restrains its joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    /// Restrains both translations.
    Pin,
    /// Restrains translation normal to the rolling surface only.
    Roller,
}

impl SupportKind {
    /// Number of reaction force components the support provides.
    #[must_use]
    pub const fn reaction_components(self) -> usize {
        match self {
            Self::Pin => 2,
            Self::Roller => 1,
        }
    }
}

impl fmt::Display for SupportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin => f.write_str("Pin"),
            Self::Roller => f.write_str("Roller"),
        }
    }
}

/// A joint held by an external support.
///
/// # Examples
/// ```
/// use trusseq::{Joint, Support, SupportKind};
///
/// let support = Support::new(Joint::new(0.0, 0.0), SupportKind::Roller);
/// assert!(support.is_roller());
/// assert_eq!(support.to_string(), "(0 0) Type: Roller");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Supported joint.
    pub joint: Joint,
    /// Kind of restraint.
    pub kind: SupportKind,
}

impl Support {
    /// Attach a support of `kind` to `joint`.
    #[must_use]
    pub const fn new(joint: Joint, kind: SupportKind) -> Self {
        Self { joint, kind }
    }

    /// Whether this is a roller support.
    #[must_use]
    pub fn is_roller(&self) -> bool {
        self.kind == SupportKind::Roller
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Type: {}", self.joint, self.kind)
    }
}
