use glam::Vec3;

/// Half-space `normal · p + constant >= 0` is kept, the rest is clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    pub fn from_normal_and_coplanar_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            constant: -point.dot(normal),
        }
    }

    pub fn set_from_normal_and_coplanar_point(&mut self, normal: Vec3, point: Vec3) -> &mut Self {
        *self = Self::from_normal_and_coplanar_point(normal, point);
        self
    }

    /// Scales to a unit normal; degenerate planes are left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.normal.length();
        if length > f32::EPSILON {
            self.normal /= length;
            self.constant /= length;
        }
        self
    }
}
