use glam::Vec3;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub tan_half_fov: f32,
    pub forward: [f32; 3],
    pub aspect: f32,
    pub right: [f32; 3],
    pub _pad1: f32,
    pub up: [f32; 3],
    pub _pad2: f32,
}

/// Per-frame scene uniform: fog, background and primitive counts
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub background: [f32; 3],
    pub fog_far: f32,
    pub light_dir: [f32; 3],
    pub time: f32,
    // x: spheres, y: boxes, z: cylinders
    pub counts: [u32; 4],
}

/// Sphere primitive data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl SphereData {
    pub fn new(center: Vec3, radius: f32, color: [f32; 3]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color,
            _pad: 0.0,
        }
    }
}

/// Box primitive data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxData {
    pub min: [f32; 3],
    pub _pad1: f32,
    pub max: [f32; 3],
    pub _pad2: f32,
    pub color: [f32; 3],
    pub _pad3: f32,
}

impl BoxData {
    pub const fn new(min: [f32; 3], max: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            min,
            _pad1: 0.0,
            max,
            _pad2: 0.0,
            color,
            _pad3: 0.0,
        }
    }

    /// Axis-aligned box centered at `position`
    pub fn centered(position: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        Self::new(
            (position - size * 0.5).to_array(),
            (position + size * 0.5).to_array(),
            color,
        )
    }
}

/// Y-axis aligned cylinder primitive data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CylinderData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub half_height: f32,
    // x: 1 when open-ended (no caps, visible from inside)
    pub flags: [u32; 4],
}

impl CylinderData {
    pub fn new(center: Vec3, radius: f32, height: f32, color: [f32; 3]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color,
            half_height: height * 0.5,
            flags: [0; 4],
        }
    }

    pub fn open_ended(center: Vec3, radius: f32, height: f32, color: [f32; 3]) -> Self {
        let mut cyl = Self::new(center, radius, height, color);
        cyl.flags[0] = 1;
        cyl
    }
}
