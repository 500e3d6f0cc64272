use std::sync::Arc;

use anyhow::{anyhow, Result};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::math::fixed_projection;
use crate::mesh::{MeshLibrary, PrimitiveKind};
use crate::scene::{Light, Material};
use crate::traits::{DrawMode, MeshRenderer};

/// Per-draw uniform stride honoring the 256-byte dynamic-offset alignment.
const UNIFORM_STRIDE: u64 = 256;

/// Upper bound on submissions per frame the uniform buffer is sized for.
const MAX_DRAWS: usize = 64;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Background clear color.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.75,
    g: 0.75,
    b: 0.75,
    a: 1.0,
};

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 4],
    normal: [f32; 3],
    _pad: f32,
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x3];

/// Per-draw uniform block consumed by the WGSL shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniform {
    model_view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    ambient_product: [f32; 4],
    diffuse_product: [f32; 4],
    specular_product: [f32; 4],
    light_position: [f32; 4],
    shininess: f32,
    _pad: [f32; 3],
}

/// Contiguous region of the shared vertex buffer holding one primitive.
#[derive(Debug, Clone, Copy)]
struct MeshRange {
    start: u32,
    count: u32,
}

/// One queued submission, flushed by `render`.
struct DrawCommand {
    kind: PrimitiveKind,
    mode: DrawMode,
    uniform: DrawUniform,
}

/// Forward renderer: one shared vertex buffer holding all three primitives
/// at fixed offsets, a per-draw uniform block bound with dynamic offsets,
/// and separate triangle-list and line-list pipelines.
pub struct GpuRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    cube_range: MeshRange,
    cone_range: MeshRange,
    sphere_range: MeshRange,
    light: Light,
    projection: Mat4,
    commands: Vec<DrawCommand>,
}

impl GpuRenderer {
    pub async fn new(window: Arc<Window>, meshes: &MeshLibrary) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| anyhow!("failed to find a suitable GPU adapter"))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &surface_config);

        let (vertex_buffer, cube_range, cone_range, sphere_range) =
            Self::create_vertex_buffer(&device, meshes);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Draw Uniforms"),
            size: UNIFORM_STRIDE * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let (triangle_pipeline, line_pipeline, bind_group) =
            Self::create_pipelines(&device, &uniform_buffer, surface_config.format);

        let depth_view = Self::create_depth_view(&device, size.width, size.height);

        log::info!(
            "renderer initialized: {} vertices uploaded",
            cube_range.count + cone_range.count + sphere_range.count
        );

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            triangle_pipeline,
            line_pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            depth_view,
            cube_range,
            cone_range,
            sphere_range,
            light: Light::fixed(),
            projection: fixed_projection(),
            commands: Vec::new(),
        })
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    /// All three primitives share one buffer, each at a fixed vertex offset.
    fn create_vertex_buffer(
        device: &wgpu::Device,
        meshes: &MeshLibrary,
    ) -> (wgpu::Buffer, MeshRange, MeshRange, MeshRange) {
        let mut vertices = Vec::with_capacity(
            meshes.cube.vertex_count() + meshes.cone.vertex_count() + meshes.sphere.vertex_count(),
        );

        let mut append = |mesh: &crate::mesh::Mesh| {
            let start = vertices.len() as u32;
            for (position, normal) in mesh.positions.iter().zip(&mesh.normals) {
                vertices.push(GpuVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    _pad: 0.0,
                });
            }
            MeshRange {
                start,
                count: mesh.vertex_count() as u32,
            }
        };

        let cube_range = append(&meshes.cube);
        let cone_range = append(&meshes.cone);
        let sphere_range = append(&meshes.sphere);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Primitive Vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        (buffer, cube_range, cone_range, sphere_range)
    }

    fn create_pipelines(
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        surface_format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::RenderPipeline, wgpu::BindGroup) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene_shader.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("draw_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(UNIFORM_STRIDE),
                }),
            }],
            label: Some("draw_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        };

        let make_pipeline = |label: &str,
                             topology: wgpu::PrimitiveTopology,
                             cull_mode: Option<wgpu::Face>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout.clone()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let triangle_pipeline = make_pipeline(
            "Triangle Pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::Face::Back),
        );
        let line_pipeline =
            make_pipeline("Line Pipeline", wgpu::PrimitiveTopology::LineList, None);

        (triangle_pipeline, line_pipeline, bind_group)
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Reconfigure the surface. The projection is a fixed view volume and
    /// does not track the aspect ratio.
    pub fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.surface_config.width = size.width;
        self.surface_config.height = size.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = Self::create_depth_view(&self.device, size.width, size.height);
    }

    fn range(&self, kind: PrimitiveKind) -> MeshRange {
        match kind {
            PrimitiveKind::Cube => self.cube_range,
            PrimitiveKind::Cone => self.cone_range,
            PrimitiveKind::Sphere => self.sphere_range,
        }
    }

    /// Flush all queued submissions into one frame and present it.
    pub fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        for (i, command) in self.commands.iter().take(MAX_DRAWS).enumerate() {
            self.queue.write_buffer(
                &self.uniform_buffer,
                i as u64 * UNIFORM_STRIDE,
                bytemuck::bytes_of(&command.uniform),
            );
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            for (i, command) in self.commands.iter().take(MAX_DRAWS).enumerate() {
                let pipeline = match command.mode {
                    DrawMode::Triangles => &self.triangle_pipeline,
                    DrawMode::Lines => &self.line_pipeline,
                };
                let range = self.range(command.kind);
                let offset = (i as u64 * UNIFORM_STRIDE) as u32;

                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[offset]);
                render_pass.draw(range.start..range.start + range.count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.commands.clear();

        Ok(())
    }
}

impl MeshRenderer for GpuRenderer {
    fn draw_mesh(
        &mut self,
        kind: PrimitiveKind,
        transform: Mat4,
        material: &Material,
        mode: DrawMode,
    ) {
        if self.commands.len() >= MAX_DRAWS {
            log::warn!("draw queue full, dropping submission");
            return;
        }

        let products = self.light.products(material);
        self.commands.push(DrawCommand {
            kind,
            mode,
            uniform: DrawUniform {
                model_view: transform.to_cols_array_2d(),
                projection: self.projection.to_cols_array_2d(),
                ambient_product: products.ambient.to_array(),
                diffuse_product: products.diffuse.to_array(),
                specular_product: products.specular.to_array(),
                light_position: self.light.position.to_array(),
                shininess: material.shininess,
                _pad: [0.0; 3],
            },
        });
    }
}
