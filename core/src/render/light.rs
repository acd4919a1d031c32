//! Light sources and flat shading.

use core::fmt::{self, Debug, Formatter};

use crate::error::Error;
use crate::math::{Color3f, Vec3, normalize};

/// A light source.
#[derive(Copy, Clone, PartialEq)]
pub struct Light {
    pub color: Color3f,
    pub kind: Kind,
    pub enabled: bool,
}

#[derive(Copy, Clone, PartialEq)]
pub enum Kind {
    /// A light source "at infinity", so that the light rays arrive
    /// parallel and the direction of the light source is the same for
    /// every point. The direction need not be normalized.
    Directional(Vec3),
    /// A light source radiating omnidirectionally from a single point.
    Point(Vec3),
}

/// Identifies one of the four light slots of a pipeline.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LightId {
    L0,
    L1,
    L2,
    L3,
}

/// A light property settable with [`Pipeline::light_fv`][super::Pipeline::light_fv].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LightAttrib {
    /// Homogeneous position `[x, y, z, w]`.
    /// See [`Light::set_position`].
    Position,
    /// Diffuse color `[r, g, b]`.
    Diffuse,
}

impl Light {
    /// Creates an enabled light of the given color and kind.
    pub fn new(color: Color3f, kind: Kind) -> Self {
        Self { color, kind, enabled: true }
    }

    /// Sets the kind of `self` from a homogeneous position.
    ///
    /// If `w` is greater than 0.99, `self` becomes a point light located at
    /// `(x, y, z)`. Otherwise it becomes a directional light shining from
    /// the direction `(x, y, z)`.
    pub fn set_position(&mut self, [x, y, z, w]: [f32; 4]) {
        let v = Vec3 { x, y, z };
        self.kind = if w > 0.99 {
            Kind::Point(v)
        } else {
            Kind::Directional(v)
        };
    }

    /// Returns the normalized direction from `pt` toward `self`.
    ///
    /// A zero direction, or a point light located exactly at `pt`,
    /// yields NaN components.
    #[inline]
    pub fn direction(&self, pt: Vec3) -> Vec3 {
        match self.kind {
            Kind::Directional(dir) => normalize(dir),
            Kind::Point(pos) => normalize(pos - pt),
        }
    }
}

/// Computes the flat Lambertian color of a face.
///
/// `base` is the unlit face color, `normal` the unit face normal, and
/// `center` the point the direction to point lights is measured from. Each
/// enabled light contributes `base * light.color * max(0, normal · L)`;
/// the sum is clamped to at most 1.0 per channel. If no light is enabled,
/// returns `base` unchanged.
///
/// NaNs in the inputs are not masked: a NaN diffuse term yields a NaN
/// channel.
pub fn shade(
    base: Color3f,
    normal: Vec3,
    center: Vec3,
    lights: &[Light],
) -> Color3f {
    let mut lit = None;
    for l in lights.iter().filter(|l| l.enabled) {
        let d = normal.dot(l.direction(center));
        // Not f32::max, which would discard a NaN
        let d = if d < 0.0 { 0.0 } else { d };
        *lit.get_or_insert(Color3f::BLACK) += base * l.color * d;
    }
    lit.map_or(base, |c: Color3f| c.clamp_max(1.0))
}

impl LightId {
    /// All the light slots, in order.
    pub const ALL: [Self; 4] = [Self::L0, Self::L1, Self::L2, Self::L3];

    pub const LIGHT0: u32 = 8;
    pub const LIGHT1: u32 = 9;
    pub const LIGHT2: u32 = 10;
    pub const LIGHT3: u32 = 11;

    /// Returns the slot index of `self`, in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl LightAttrib {
    pub const POSITION: u32 = 12;
    pub const DIFFUSE: u32 = 13;

    /// Returns the number of values `self` takes.
    pub const fn value_count(self) -> usize {
        match self {
            Self::Position => 4,
            Self::Diffuse => 3,
        }
    }

    /// Returns the name of `self` as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Diffuse => "diffuse",
        }
    }
}

impl TryFrom<u32> for LightId {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            Self::LIGHT0 => Ok(Self::L0),
            Self::LIGHT1 => Ok(Self::L1),
            Self::LIGHT2 => Ok(Self::L2),
            Self::LIGHT3 => Ok(Self::L3),
            _ => Err(Error::InvalidEnum { kind: "light id", value }),
        }
    }
}

impl TryFrom<u32> for LightAttrib {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            Self::POSITION => Ok(Self::Position),
            Self::DIFFUSE => Ok(Self::Diffuse),
            _ => Err(Error::InvalidEnum { kind: "light attribute", value }),
        }
    }
}

impl Debug for Light {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Light")
            .field("kind", &self.kind)
            .field("color", &self.color)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Default for Light {
    /// Returns a disabled black directional light shining along +z.
    fn default() -> Self {
        Self {
            color: Color3f::BLACK,
            kind: Kind::default(),
            enabled: false,
        }
    }
}

impl Debug for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Directional(dir) => {
                f.debug_tuple("Directional").field(&dir).finish()
            }
            Kind::Point(pt) => f.debug_tuple("Point").field(&pt).finish(),
        }
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::Directional(Vec3::Z)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::{rgb, vec3};

    use super::*;

    const RED: Color3f = rgb(1.0, 0.0, 0.0);

    #[test]
    fn position_selects_kind() {
        let mut l = Light::default();
        l.set_position([1.0, 2.0, 3.0, 1.0]);
        assert_eq!(l.kind, Kind::Point(vec3(1.0, 2.0, 3.0)));
        l.set_position([1.0, 2.0, 3.0, 0.0]);
        assert_eq!(l.kind, Kind::Directional(vec3(1.0, 2.0, 3.0)));
        l.set_position([0.0, 0.0, 1.0, 0.99]);
        assert_eq!(l.kind, Kind::Directional(Vec3::Z));
    }

    #[test]
    fn no_enabled_lights_keeps_base_color() {
        let mut lights = [Light::new(Color3f::WHITE, Kind::default()); 4];
        lights.iter_mut().for_each(|l| l.enabled = false);
        let c = shade(RED, Vec3::Z, Vec3::ZERO, &lights);
        assert_eq!(c, RED);
    }

    #[test]
    fn directional_light_facing_away_is_black() {
        let l = Light::new(Color3f::WHITE, Kind::Directional(-Vec3::Z));
        let c = shade(RED, Vec3::Z, Vec3::ZERO, &[l]);
        assert_eq!(c, Color3f::BLACK);
    }

    #[test]
    fn directional_light_is_lambertian() {
        // 60° off the normal
        let dir = vec3(0.0, 1.732_050_8, 1.0);
        let l = Light::new(rgb(1.0, 0.5, 1.0), Kind::Directional(dir));
        let c = shade(rgb(1.0, 1.0, 0.0), Vec3::Z, Vec3::ZERO, &[l]);
        assert_approx_eq!(c, rgb(0.5, 0.25, 0.0));
    }

    #[test]
    fn point_light_uses_direction_from_center() {
        let l = Light::new(Color3f::WHITE, Kind::Point(vec3(0.0, 0.0, 5.0)));
        let c = shade(RED, Vec3::Z, vec3(0.0, 0.0, 1.0), &[l]);
        assert_approx_eq!(c, RED);

        let c = shade(RED, Vec3::Z, vec3(0.0, 0.0, 9.0), &[l]);
        assert_eq!(c, Color3f::BLACK);
    }

    #[test]
    fn accumulated_channels_are_clamped() {
        let l = Light::new(Color3f::WHITE, Kind::Directional(Vec3::Z));
        let c = shade(rgb(0.75, 0.25, 1.0), Vec3::Z, Vec3::ZERO, &[l, l]);
        assert_eq!(c, rgb(1.0, 0.5, 1.0));
    }

    #[test]
    fn nan_normal_propagates() {
        let l = Light::new(Color3f::WHITE, Kind::Directional(Vec3::Z));
        let nan = vec3(f32::NAN, f32::NAN, f32::NAN);
        let c = shade(RED, nan, Vec3::ZERO, &[l]);
        assert!(c.0.iter().all(|ch| ch.is_nan()));
    }

    #[test]
    fn raw_enumerants() {
        assert_eq!(LightId::try_from(8), Ok(LightId::L0));
        assert_eq!(LightId::try_from(11), Ok(LightId::L3));
        assert_eq!(
            LightId::try_from(12),
            Err(Error::InvalidEnum { kind: "light id", value: 12 })
        );
        assert_eq!(LightAttrib::try_from(13), Ok(LightAttrib::Diffuse));
        assert!(LightAttrib::try_from(7).is_err());
        assert_eq!(LightId::L2.index(), 2);
    }

    #[test]
    fn debug_output() {
        let l = Light::default();
        assert_eq!(
            format!("{l:?}"),
            "Light { kind: Directional(Vec3[0.0, 0.0, 1.0]), \
             color: rgb[0.0, 0.0, 0.0], enabled: false }"
        );
    }
}
