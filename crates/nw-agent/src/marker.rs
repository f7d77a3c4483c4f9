//! Direction marker a renderer draws at an agent's head.

use std::f32::consts::TAU;

use nw_core::Vec3;

use crate::Trail;

/// Shape drawn at the agent's current position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Marker {
    /// The two newest trail points coincide: the agent is standing still.
    Circle,

    /// Moving; `heading` is the direction of travel in radians, measured
    /// from +x towards +y.
    Triangle { heading: f32 },
}

impl Marker {
    /// Derive the marker from a trail.  `None` until the trail holds at
    /// least three points.
    pub fn from_trail(trail: &Trail) -> Option<Marker> {
        if trail.len() < 3 {
            return None;
        }
        let (newest, prev) = (trail[0], trail[1]);
        if newest == prev {
            return Some(Marker::Circle);
        }
        let d = newest - prev;
        Some(Marker::Triangle { heading: d.y.atan2(d.x) })
    }

    /// Triangle corners around `center`, the first one pointing along the
    /// heading.  `None` for [`Marker::Circle`].
    pub fn triangle(self, center: Vec3, radius: f32) -> Option<[Vec3; 3]> {
        let Marker::Triangle { heading } = self else {
            return None;
        };
        let corner = |k: f32| {
            let a = heading + k * TAU / 3.0;
            center + Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
        };
        Some([corner(0.0), corner(1.0), corner(2.0)])
    }
}
