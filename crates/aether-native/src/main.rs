//! Desktop preview of the background scene.
//!
//! Renders the same animator-driven scene as the web frontend in a winit
//! window. There is no scroll container here: ArrowUp/ArrowDown (or digits
//! 1-4) move the published section index, exercising the same clamp-and-seek
//! path the browser takes.

use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use aether_core::{
    build_instances, icosahedron, resolve_section, rgb, section_configs, starfield, torus_knot,
    validate_configs, Camera, MeshInstance, SceneAnimator, SectionConfig, StarVertex, Vertex,
    AMBIENT_INTENSITY, FILL_LIGHT_COLOR, FILL_LIGHT_INTENSITY, KNOT_P, KNOT_Q,
    KNOT_RADIAL_SEGMENTS, KNOT_RADIUS, KNOT_TUBE, KNOT_TUBULAR_SEGMENTS, SECTION_COUNT,
    STAR_COUNT, STAR_ROTATE_PER_SEC, STAR_SEED, STAR_SHELL_DEPTH, STAR_SHELL_RADIUS,
    STAR_TWINKLE_SPEED,
};

const MAX_MESH_INSTANCES: usize = 8;
const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    key_light: [f32; 4],
    fill_light: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    extra: [f32; 4],
}

impl InstanceRaw {
    fn pack(instance: &MeshInstance) -> Self {
        Self {
            model: instance.model.to_cols_array_2d(),
            color: [instance.color.x, instance.color.y, instance.color.z, 1.0],
            emissive: [
                instance.emissive.x,
                instance.emissive.y,
                instance.emissive.z,
                1.0,
            ],
            extra: [instance.distortion, 0.0, 0.0, 0.0],
        }
    }
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    mesh_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    knot_vb: wgpu::Buffer,
    knot_ib: wgpu::Buffer,
    knot_index_count: u32,
    ico_vb: wgpu::Buffer,
    ico_ib: wgpu::Buffer,
    ico_index_count: u32,
    instance_vb: wgpu::Buffer,
    star_vb: wgpu::Buffer,
    star_count: u32,
    depth_view: wgpu::TextureView,

    width: u32,
    height: u32,
    last_frame: Instant,

    // Scene state: the preview is its own composition root.
    configs: [SectionConfig; SECTION_COUNT],
    current_section: i32,
    animator: SceneAnimator,
    camera: Camera,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, size.width, size.height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(aether_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 12,
                        shader_location: 1,
                    },
                ],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 0,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 32,
                        shader_location: 4,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 48,
                        shader_location: 5,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 64,
                        shader_location: 6,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 80,
                        shader_location: 7,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 96,
                        shader_location: 8,
                    },
                ],
            },
        ];
        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let star_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StarVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];
        let star_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("star_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_star"),
                buffers: &star_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_star"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let knot = torus_knot(
            KNOT_RADIUS,
            KNOT_TUBE,
            KNOT_TUBULAR_SEGMENTS,
            KNOT_RADIAL_SEGMENTS,
            KNOT_P,
            KNOT_Q,
        );
        let ico = icosahedron();
        let stars = starfield(STAR_COUNT, STAR_SHELL_RADIUS, STAR_SHELL_DEPTH, STAR_SEED);

        let knot_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("knot_vb"),
            contents: bytemuck::cast_slice(&knot.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let knot_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("knot_ib"),
            contents: bytemuck::cast_slice(&knot.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let ico_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ico_vb"),
            contents: bytemuck::cast_slice(&ico.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ico_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ico_ib"),
            contents: bytemuck::cast_slice(&ico.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let star_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_vb"),
            contents: bytemuck::cast_slice(&stars),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceRaw>() * MAX_MESH_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let configs = section_configs();
        validate_configs(&configs)?;
        let animator = SceneAnimator::new(&configs[0]);
        let camera = Camera::new(size.width as f32 / size.height.max(1) as f32);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            star_pipeline,
            uniform_buffer,
            bind_group,
            knot_index_count: knot.indices.len() as u32,
            knot_vb,
            knot_ib,
            ico_index_count: ico.indices.len() as u32,
            ico_vb,
            ico_ib,
            instance_vb,
            star_count: stars.len() as u32,
            star_vb,
            depth_view,
            width: size.width,
            height: size.height,
            last_frame: Instant::now(),
            configs,
            current_section: 0,
            animator,
            camera,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.width, self.height);
        self.camera.aspect = self.width as f32 / self.height.max(1) as f32;
    }

    /// Move the published section index, unclamped like the web tracker; the
    /// frame resolves it before lookup.
    fn nudge_section(&mut self, delta: i32) {
        self.current_section += delta;
        log::info!(
            "section {} (resolved {})",
            self.current_section,
            resolve_section(self.current_section)
        );
    }

    fn set_section(&mut self, index: i32) {
        self.current_section = index;
        log::info!("section {}", resolve_section(self.current_section));
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt_sec = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let section = resolve_section(self.current_section);
        // Split borrow: clone the small config so the animator can be stepped.
        let config = self.configs[section].clone();
        self.animator.seek_targets(&config);
        self.animator.advance(dt_sec);
        self.camera.follow(&self.animator);

        let instances = build_instances(&self.animator);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SceneUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            eye: [self.camera.eye.x, self.camera.eye.y, self.camera.eye.z, 0.0],
            key_light: [
                self.animator.key_light_color.x,
                self.animator.key_light_color.y,
                self.animator.key_light_color.z,
                1.0,
            ],
            fill_light: {
                let fill = rgb(FILL_LIGHT_COLOR);
                [fill.x, fill.y, fill.z, FILL_LIGHT_INTENSITY]
            },
            params: [
                self.animator.elapsed,
                AMBIENT_INTENSITY,
                self.animator.elapsed * STAR_ROTATE_PER_SEC,
                STAR_TWINKLE_SPEED,
            ],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let count = instances.len().min(MAX_MESH_INSTANCES);
        let packed: Vec<InstanceRaw> = instances[..count].iter().map(InstanceRaw::pack).collect();
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&packed));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.004,
                            g: 0.005,
                            b: 0.012,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            if count > 0 {
                rpass.set_vertex_buffer(0, self.knot_vb.slice(..));
                rpass.set_index_buffer(self.knot_ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.knot_index_count, 0, 0..1);
            }
            if count > 1 {
                rpass.set_vertex_buffer(0, self.ico_vb.slice(..));
                rpass.set_index_buffer(self.ico_ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.ico_index_count, 0, 1..count as u32);
            }

            rpass.set_pipeline(&self.star_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.star_vb.slice(..));
            rpass.draw(0..self.star_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let depth = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
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
    depth.create_view(&wgpu::TextureViewDescriptor::default())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Aether scene preview")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");
    log::info!("ArrowUp/ArrowDown or 1-4 switch sections");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key, .. },
                ..
            } => {
                if key.state == ElementState::Pressed {
                    match key.physical_key {
                        PhysicalKey::Code(KeyCode::ArrowDown | KeyCode::PageDown) => {
                            state.nudge_section(1)
                        }
                        PhysicalKey::Code(KeyCode::ArrowUp | KeyCode::PageUp) => {
                            state.nudge_section(-1)
                        }
                        PhysicalKey::Code(KeyCode::Digit1) => state.set_section(0),
                        PhysicalKey::Code(KeyCode::Digit2) => state.set_section(1),
                        PhysicalKey::Code(KeyCode::Digit3) => state.set_section(2),
                        PhysicalKey::Code(KeyCode::Digit4) => state.set_section(3),
                        PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => match state.render() {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            },
            _ => {}
        })
        .unwrap();
}
