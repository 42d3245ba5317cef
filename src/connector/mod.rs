mod align;
mod catalog;
mod template;

pub use align::AlignConnector;
pub use catalog::Catalog;
pub use template::{StructureKind, StructureTemplate};

use nalgebra::Translation3;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::math::{Isometry3, Point3, UnitQuaternion, Vector3};

/// Which side of a join a connector sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Male,
    Female,
}

impl Polarity {
    /// Returns the other polarity.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Polarity::Male => Polarity::Female,
            Polarity::Female => Polarity::Male,
        }
    }

    /// Two connectors can join only when their polarities differ.
    #[must_use]
    pub fn can_join(self, other: Self) -> bool {
        other == self.opposite()
    }
}

/// An attachment point on a structure.
///
/// The frame is relative to the owning structure. Its local +Z axis is the
/// connector's forward direction and +Y its up direction. Alignment makes a
/// moving connector's frame equal to the target's, so joinable pairs are
/// authored with the same sense: male connectors facing out of their
/// structure, female connectors facing in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    name: String,
    polarity: Polarity,
    frame: Isometry3,
}

impl Connector {
    /// Creates a connector with an explicit local frame.
    #[must_use]
    pub fn new(name: impl Into<String>, polarity: Polarity, frame: Isometry3) -> Self {
        Self {
            name: name.into(),
            polarity,
            frame,
        }
    }

    /// Connector name, unique within its template by convention only.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Local frame relative to the owning structure.
    #[must_use]
    pub fn frame(&self) -> &Isometry3 {
        &self.frame
    }

    /// World frame given the owning structure's transform.
    #[must_use]
    pub fn world_frame(&self, structure: &Isometry3) -> Isometry3 {
        structure * self.frame
    }

    /// World position given the owning structure's transform.
    #[must_use]
    pub fn world_position(&self, structure: &Isometry3) -> Point3 {
        structure * Point3::from(self.frame.translation.vector)
    }
}

/// Authoring form of a connector, as read from a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConnectorDef {
    name: String,
    polarity: Polarity,
    position: [f64; 3],
    #[serde(default = "default_forward")]
    forward: [f64; 3],
    #[serde(default = "default_up")]
    up: [f64; 3],
}

fn default_forward() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

impl ConnectorDef {
    /// Resolves the basis vectors into a frame.
    pub(crate) fn build(&self, template: &str) -> Result<Connector, CatalogError> {
        let degenerate = |reason| CatalogError::DegenerateFrame {
            template: template.to_owned(),
            connector: self.name.clone(),
            reason,
        };

        let position = Point3::from(self.position);
        let forward = Vector3::from(self.forward);
        let up = Vector3::from(self.up);
        let frame = frame_from_basis(&position, &forward, &up).map_err(degenerate)?;

        Ok(Connector::new(self.name.clone(), self.polarity, frame))
    }
}

/// Builds a frame whose +Z axis points along `forward` with +Y as close to
/// `up` as orthogonality allows.
fn frame_from_basis(
    position: &Point3,
    forward: &Vector3,
    up: &Vector3,
) -> Result<Isometry3, &'static str> {
    let (f, u) = (forward.norm(), up.norm());
    if !f.is_finite() || f < crate::math::TOLERANCE {
        return Err("forward vector is zero");
    }
    if !u.is_finite() || u < crate::math::TOLERANCE {
        return Err("up vector is zero");
    }
    if forward.cross(up).norm() < 1e-9 * f * u {
        return Err("forward is parallel to up");
    }

    let rotation = UnitQuaternion::face_towards(forward, up);
    Ok(Isometry3::from_parts(
        Translation3::from(position.coords),
        rotation,
    ))
}
