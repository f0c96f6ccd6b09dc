/// Sphere the geographic coordinates are defined on.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Mean radius of the Earth, in kilometers.
    pub const EARTH: Self = Sphere { radius: 6371.0 };

    /// Creates a sphere with the given radius. Distances are measured in the units of the radius.
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}
