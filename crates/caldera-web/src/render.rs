use crate::constants::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, INSTANCE_CAPACITY};
use caldera_core::{Breathing, PressureVisuals, SpriteInstance};
use glam::{Mat4, Vec2, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

/// Everything the renderer needs from the simulation for one frame.
pub struct SceneParams {
    pub time: f32,
    pub pressure: f32,
    pub cam_rot: Vec2,
    pub visuals: PressureVisuals,
    pub breathing: Breathing,
    pub tunnel: f32,
    pub basalt: f32,
    pub pumice: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    resolution: [f32; 2],
    time: f32,
    pressure: f32,
    cam_rot: [f32; 2],
    glow_opacity: f32,
    emissive: f32,
    core_scale: f32,
    key_intensity: f32,
    fill_intensity: f32,
    tunnel: f32,
    basalt: f32,
    pumice: f32,
    crater_opacity: f32,
    crater_scale: f32,
    plume_y: f32,
    plume_opacity: f32,
    _pad: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteUniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    bloom_strength: f32,
    blur_dir: [f32; 2],
    threshold: f32,
    _pad: f32,
}

const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

struct RenderTargets {
    hdr_view: wgpu::TextureView,
    bloom_a_view: wgpu::TextureView,
    bloom_b_view: wgpu::TextureView,
}

impl RenderTargets {
    fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let make = |label: &str, w: u32, h: u32| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some(label),
                    size: wgpu::Extent3d {
                        width: w.max(1),
                        height: h.max(1),
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: wgpu::TextureDimension::D2,
                    format: HDR_FORMAT,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                        | wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        };
        let bloom_w = (width.max(1) / 2).max(1);
        let bloom_h = (height.max(1) / 2).max(1);
        Self {
            hdr_view: make("hdr_tex", width, height),
            bloom_a_view: make("bloom_a", bloom_w, bloom_h),
            bloom_b_view: make("bloom_b", bloom_w, bloom_h),
        }
    }
}

/// Bind groups that reference the offscreen target views; recreated with
/// them on resize.
struct PostBindGroups {
    hdr: wgpu::BindGroup,
    from_bloom_a: wgpu::BindGroup,
    from_bloom_b: wgpu::BindGroup,
    bloom_a_only: wgpu::BindGroup,
}

impl PostBindGroups {
    fn create(
        device: &wgpu::Device,
        bgl0: &wgpu::BindGroupLayout,
        bgl1: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        uniforms: &wgpu::Buffer,
        targets: &RenderTargets,
    ) -> Self {
        let full = |label: &str, tex: &wgpu::TextureView| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(tex),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: uniforms.as_entire_binding(),
                    },
                ],
            })
        };
        Self {
            hdr: full("bg_hdr", &targets.hdr_view),
            from_bloom_a: full("bg_from_bloom_a", &targets.bloom_a_view),
            from_bloom_b: full("bg_from_bloom_b", &targets.bloom_b_view),
            bloom_a_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_bloom_a_only"),
                layout: bgl1,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            }),
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // scene + sprites into the HDR target
    scene_pipeline: wgpu::RenderPipeline,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    sprite_pipeline: wgpu::RenderPipeline,
    sprite_uniform_buffer: wgpu::Buffer,
    sprite_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,

    // bloom chain
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post_bgl0: wgpu::BindGroupLayout,
    post_bgl1: wgpu::BindGroupLayout,
    post_uniform_buffer: wgpu::Buffer,
    post_groups: PostBindGroups,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // the composite pass applies gamma itself, so prefer a non-srgb view
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::create(&device, width, height);

        // --- scene pass ---
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(caldera_core::SCENE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_scene"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        // --- sprite pass ---
        let sprite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(caldera_core::SPRITES_WGSL.into()),
        });
        let sprite_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_bgl"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let sprite_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pl"),
            bind_group_layouts: &[&sprite_bgl],
            push_constant_ranges: &[],
        });
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = create_instance_buffer(&device, INSTANCE_CAPACITY);
        let sprite_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&sprite_pl),
            vertex: wgpu::VertexState {
                module: &sprite_shader,
                entry_point: Some("vs_sprite"),
                buffers: &sprite_vertex_layouts(),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &sprite_shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: HDR_FORMAT,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let sprite_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_uniforms"),
            size: std::mem::size_of::<SpriteUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sprite_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_bg"),
            layout: &sprite_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: sprite_uniform_buffer.as_entire_binding(),
            }],
        });

        // --- bloom chain ---
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(caldera_core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post_bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let post_bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });
        let post_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let post_pl0 = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_pl0"),
            bind_group_layouts: &[&post_bgl0],
            push_constant_ranges: &[],
        });
        let post_pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_pl_composite"),
            bind_group_layouts: &[&post_bgl0, &post_bgl1],
            push_constant_ranges: &[],
        });
        let post_pipeline = |label: &str,
                             layout: &wgpu::PipelineLayout,
                             entry: &str,
                             target_format: wgpu::TextureFormat| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: &post_shader,
                    entry_point: Some("vs_fullscreen"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &post_shader,
                    entry_point: Some(entry),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let bright_pipeline = post_pipeline("bright_pipeline", &post_pl0, "fs_bright", HDR_FORMAT);
        let blur_pipeline = post_pipeline("blur_pipeline", &post_pl0, "fs_blur", HDR_FORMAT);
        let composite_pipeline =
            post_pipeline("composite_pipeline", &post_pl_composite, "fs_composite", format);

        let post_groups = PostBindGroups::create(
            &device,
            &post_bgl0,
            &post_bgl1,
            &linear_sampler,
            &post_uniform_buffer,
            &targets,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            sprite_pipeline,
            sprite_uniform_buffer,
            sprite_bind_group,
            quad_vb,
            instance_vb,
            instance_capacity: INSTANCE_CAPACITY,
            targets,
            linear_sampler,
            post_bgl0,
            post_bgl1,
            post_uniform_buffer,
            post_groups,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets = RenderTargets::create(&self.device, width, height);
            self.rebuild_post_bind_groups();
        }
    }

    pub fn render(
        &mut self,
        scene: &SceneParams,
        instances: &[SpriteInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_vb = create_instance_buffer(&self.device, self.instance_capacity);
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));

        let u = SceneUniforms {
            resolution: [self.width as f32, self.height as f32],
            time: scene.time,
            pressure: scene.pressure,
            cam_rot: scene.cam_rot.to_array(),
            glow_opacity: scene.visuals.glow_opacity,
            emissive: scene.visuals.emissive_intensity,
            core_scale: scene.visuals.core_scale,
            key_intensity: scene.visuals.key_light,
            fill_intensity: scene.visuals.fill_light,
            tunnel: scene.tunnel,
            basalt: scene.basalt,
            pumice: scene.pumice,
            crater_opacity: scene.breathing.crater_opacity,
            crater_scale: scene.breathing.crater_scale,
            plume_y: scene.breathing.plume_y,
            plume_opacity: scene.breathing.plume_opacity,
            _pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&u));
        self.queue.write_buffer(
            &self.sprite_uniform_buffer,
            0,
            bytemuck::bytes_of(&SpriteUniforms {
                view_proj: self.view_proj(scene.cam_rot),
            }),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: procedural scene then particle sprites into HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if !instances.is_empty() {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_bind_group(0, &self.sprite_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
                rpass.draw(0..6, 0..(instances.len() as u32));
            }
        }

        let bloom_res = [
            (self.width as f32 / 2.0).max(1.0),
            (self.height as f32 / 2.0).max(1.0),
        ];
        let mut post = PostUniforms {
            resolution: bloom_res,
            time: scene.time,
            bloom_strength: 0.9,
            blur_dir: [0.0, 0.0],
            threshold: 0.6,
            _pad: 0.0,
        };

        // Pass 2: bright pass -> bloom_a
        self.queue
            .write_buffer(&self.post_uniform_buffer, 0, bytemuck::bytes_of(&post));
        self.blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.bright_pipeline,
            &self.post_groups.hdr,
            None,
        );

        // Pass 3: horizontal blur bloom_a -> bloom_b
        post.blur_dir = [1.0, 0.0];
        self.queue
            .write_buffer(&self.post_uniform_buffer, 0, bytemuck::bytes_of(&post));
        self.blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );

        // Pass 4: vertical blur bloom_b -> bloom_a
        post.blur_dir = [0.0, 1.0];
        self.queue
            .write_buffer(&self.post_uniform_buffer, 0, bytemuck::bytes_of(&post));
        self.blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );

        // Pass 5: composite to the swapchain
        post.blur_dir = [0.0, 0.0];
        post.resolution = [self.width as f32, self.height as f32];
        self.queue
            .write_buffer(&self.post_uniform_buffer, 0, bytemuck::bytes_of(&post));
        self.blit(
            &mut encoder,
            "composite",
            &view,
            &self.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn view_proj(&self, cam_rot: Vec2) -> [[f32; 4]; 4] {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(Vec3::from(CAMERA_EYE), Vec3::ZERO, Vec3::Y);
        let world = Mat4::from_rotation_x(cam_rot.x) * Mat4::from_rotation_y(cam_rot.y);
        (proj * view * world).to_cols_array_2d()
    }

    fn rebuild_post_bind_groups(&mut self) {
        self.post_groups = PostBindGroups::create(
            &self.device,
            &self.post_bgl0,
            &self.post_bgl1,
            &self.linear_sampler,
            &self.post_uniform_buffer,
            &self.targets,
        );
    }

    fn blit(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        target: &wgpu::TextureView,
        pipeline: &wgpu::RenderPipeline,
        bg0: &wgpu::BindGroup,
        bg1: Option<&wgpu::BindGroup>,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bg0, &[]);
        if let Some(g1) = bg1 {
            rpass.set_bind_group(1, g1, &[]);
        }
        rpass.draw(0..3, 0..1);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<SpriteInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn sprite_vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        // slot 0: quad positions
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        },
    ]
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}
