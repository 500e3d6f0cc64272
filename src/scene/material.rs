use glam::Vec4;

/// Phong material: ambient/diffuse/specular reflectances plus a shininess
/// exponent. RGBA components, matching the shader's product model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
}

impl Material {
    pub const fn new(ambient: Vec4, diffuse: Vec4, specular: Vec4, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }
}

/// The single fixed scene light. Directional (w = 0).
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec4,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}

impl Light {
    pub const fn fixed() -> Self {
        Self {
            position: Vec4::new(0.0, 0.0, -1.0, 0.0),
            ambient: Vec4::new(0.5, 0.5, 0.5, 1.0),
            diffuse: Vec4::new(1.0, 1.0, 1.0, 1.0),
            specular: Vec4::new(0.0, 1.0, 0.0, 1.0),
        }
    }

    /// Component-wise light/material products, computed CPU-side once per
    /// draw. These are the only lighting terms the shader sees.
    pub fn products(&self, material: &Material) -> LightingProducts {
        LightingProducts {
            ambient: self.ambient * material.ambient,
            diffuse: self.diffuse * material.diffuse,
            specular: self.specular * material.specular,
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::fixed()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LightingProducts {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
}
