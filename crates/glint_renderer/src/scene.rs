//! Scene aggregate: an ordered list of surfaces searched by linear scan.

use crate::{HitRecord, Hittable, Ray, Sphere};
use glint_math::Interval;

/// Any surface a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl Hittable for Surface {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray, ray_t),
        }
    }
}

/// A list of surfaces. Insertion order only affects iteration cost.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface to the scene.
    pub fn add(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    /// Remove every surface.
    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.iter()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for surface in &self.surfaces {
            if let Some(rec) = surface.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
