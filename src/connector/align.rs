use nalgebra::Translation3;

use crate::math::Isometry3;

use super::Connector;

/// Computes the structure transform that places a moving connector exactly
/// on a target connector frame.
///
/// The structure is first rotated so the moving connector's forward/up basis
/// matches the target's, then translated so the connector positions coincide.
/// The result depends only on the connector's local frame and the target, so
/// the structure's current transform has no influence on where it ends up.
pub struct AlignConnector<'a> {
    structure: Isometry3,
    moving: &'a Connector,
    target: Isometry3,
}

impl<'a> AlignConnector<'a> {
    /// Creates a new `AlignConnector` operation.
    ///
    /// * `structure` - Current world transform of the moving structure.
    /// * `moving` - Connector on the moving structure.
    /// * `target` - World frame of the fixed connector.
    #[must_use]
    pub fn new(structure: Isometry3, moving: &'a Connector, target: Isometry3) -> Self {
        Self {
            structure,
            moving,
            target,
        }
    }

    /// Executes the alignment, returning the new structure transform.
    #[must_use]
    pub fn execute(&self) -> Isometry3 {
        let current = self.moving.world_frame(&self.structure);
        let correction = self.target.rotation * current.rotation.inverse();
        let rotation = correction * self.structure.rotation;

        // Connector offset from the structure origin under the new rotation
        let offset = rotation * self.moving.frame().translation.vector;
        let translation = self.target.translation.vector - offset;

        Isometry3::from_parts(Translation3::from(translation), rotation)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::connector::Polarity;
    use crate::math::{UnitQuaternion, Vector3};

    fn connector(position: Vector3, yaw: f64) -> Connector {
        Connector::new(
            "c",
            Polarity::Female,
            Isometry3::new(position, Vector3::y() * yaw),
        )
    }

    fn assert_same_frame(a: &Isometry3, b: &Isometry3) {
        assert_relative_eq!(a.translation.vector, b.translation.vector, epsilon = 1e-9);
        assert!(a.rotation.angle_to(&b.rotation) < 1e-9);
    }

    fn starts() -> Vec<Isometry3> {
        vec![
            Isometry3::identity(),
            Isometry3::new(Vector3::new(5.0, 0.0, -3.0), Vector3::y() * 1.2),
            Isometry3::new(Vector3::new(-7.0, 2.0, 4.0), Vector3::new(0.3, -0.8, 0.5)),
        ]
    }

    #[test]
    fn connector_lands_on_target() {
        let moving = connector(Vector3::new(0.0, 0.0, -3.0), 0.0);
        let target = Isometry3::new(Vector3::new(0.0, 0.0, 3.0), Vector3::zeros());

        let placed = AlignConnector::new(Isometry3::identity(), &moving, target).execute();

        assert_same_frame(&moving.world_frame(&placed), &target);
        assert_relative_eq!(placed.translation.vector, Vector3::new(0.0, 0.0, 6.0), epsilon = 1e-12);
    }

    #[test]
    fn rotated_connector_turns_structure() {
        // Connector faces +X locally; target faces +Z, so the structure turns -90° about Y
        let moving = connector(Vector3::new(2.0, 0.0, 0.0), FRAC_PI_2);
        let target = Isometry3::new(Vector3::new(0.0, 0.0, 10.0), Vector3::zeros());

        let placed = AlignConnector::new(Isometry3::identity(), &moving, target).execute();

        assert_same_frame(&moving.world_frame(&placed), &target);
        let expected = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -FRAC_PI_2);
        assert!(placed.rotation.angle_to(&expected) < 1e-9);
    }

    #[test]
    fn result_ignores_starting_transform() {
        let moving = connector(Vector3::new(1.0, 0.5, -2.0), PI / 3.0);
        let target = Isometry3::new(Vector3::new(4.0, 0.0, 9.0), Vector3::y() * 2.5);

        let reference = AlignConnector::new(Isometry3::identity(), &moving, target).execute();
        for start in starts() {
            let placed = AlignConnector::new(start, &moving, target).execute();
            assert_same_frame(&placed, &reference);
            assert_relative_eq!(
                moving.world_position(&placed),
                moving.world_position(&reference),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn realignment_is_idempotent() {
        let moving = connector(Vector3::new(-3.0, 0.0, 0.0), -FRAC_PI_2);
        let target = Isometry3::new(Vector3::new(12.0, 0.0, -6.0), Vector3::y() * 0.7);

        for start in starts() {
            let once = AlignConnector::new(start, &moving, target).execute();
            let twice = AlignConnector::new(once, &moving, target).execute();
            assert_same_frame(&once, &twice);
        }
    }
}
