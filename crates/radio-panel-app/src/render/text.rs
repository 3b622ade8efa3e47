use bytemuck::{Pod, Zeroable};

use radio_panel_core::scene::{DrawCmd, DrawList};

use crate::render::{RenderCtx, RenderTarget};
use crate::text::{GlyphQuad, GlyphSet, RasterGlyph, layout_glyph};

/// Renderer for `DrawCmd::Text`.
///
/// Each ASCII glyph gets its own small R8Unorm texture and bind group,
/// uploaded on first use from the pre-rasterized [`GlyphSet`] and kept for
/// the renderer's lifetime. Quads for the whole frame go into one vertex
/// buffer; the pass then draws one glyph run at a time, rebinding the
/// glyph texture between runs.
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,

    // indexed by ASCII code, populated lazily
    glyphs: Vec<Option<GpuGlyph>>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

struct GpuGlyph {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            sampler: None,
            glyphs: (0..128).map(|_| None).collect(),
            vertex_vbo: None,
            vertex_capacity: 0,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        glyph_set: &GlyphSet,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_sampler(ctx);

        let text_cmds: Vec<_> = draw_list
            .iter_in_paint_order()
            .filter_map(|item| {
                if let DrawCmd::Text(cmd) = &item.cmd { Some(cmd.clone()) } else { None }
            })
            .collect();

        // ── lay out glyph runs ─────────────────────────────────────────────
        let mut vertices: Vec<TextVertex> = Vec::new();
        let mut runs: Vec<(usize, std::ops::Range<u32>)> = Vec::new();

        for cmd in &text_cmds {
            let color = [cmd.color.r, cmd.color.g, cmd.color.b, 1.0];
            let mut pen_x = cmd.origin.x;

            for ch in cmd.text.chars() {
                let Some(glyph) = glyph_set.get(ch) else {
                    log::warn!("TextRenderer: no glyph for {ch:?}, skipping");
                    continue;
                };

                // Blank glyphs (space) only move the pen.
                if glyph.width == 0 || glyph.height == 0 {
                    pen_x += glyph.advance_x * cmd.scale;
                    continue;
                }

                self.ensure_glyph(ctx, ch as usize, glyph);

                let quad = layout_glyph(pen_x, cmd.origin.y, cmd.scale, glyph);
                let start = vertices.len() as u32;
                vertices.extend_from_slice(&quad_vertices(&quad, color));
                runs.push((ch as usize, start..vertices.len() as u32));
                pen_x = quad.pen_advance;
            }
        }

        if vertices.is_empty() {
            return;
        }

        self.ensure_vertex_capacity(ctx, vertices.len());
        let Some(vertex_vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue.write_buffer(vertex_vbo, 0, bytemuck::cast_slice(&vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("panel text pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_vbo.slice(..));

        for (code, range) in &runs {
            let Some(gpu) = self.glyphs[*code].as_ref() else { continue };
            rpass.set_bind_group(0, &gpu.bind_group, &[]);
            rpass.draw(range.clone(), 0..1);
        }
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_glyph(&mut self, ctx: &RenderCtx<'_>, code: usize, glyph: &RasterGlyph) {
        if self.glyphs[code].is_some() {
            return;
        }
        let (Some(bgl), Some(sampler)) = (self.bind_group_layout.as_ref(), self.sampler.as_ref())
        else {
            return;
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glyph texture"),
            size: wgpu::Extent3d {
                width: glyph.width,
                height: glyph.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &glyph.bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(glyph.width),
                rows_per_image: Some(glyph.height),
            },
            wgpu::Extent3d {
                width: glyph.width,
                height: glyph.height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("glyph bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.glyphs[code] = Some(GpuGlyph { _texture: texture, bind_group });
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("panel text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("panel text bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("panel text pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("panel text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[TextVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        // Cached bind groups reference the old layout; rebuild them lazily.
        for slot in &mut self.glyphs {
            *slot = None;
        }
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("panel text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(256);
        let new_size = (new_cap * std::mem::size_of::<TextVertex>()) as u64;
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("panel text vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Expands a glyph quad into two triangles. Texture v grows downward, so
/// the quad's top edge (`max_y`) maps to v = 0.
fn quad_vertices(quad: &GlyphQuad, color: [f32; 4]) -> [TextVertex; 6] {
    let v = |x: f32, y: f32, u: f32, vv: f32| TextVertex { pos: [x, y], uv: [u, vv], color };
    [
        v(quad.min_x, quad.max_y, 0.0, 0.0),
        v(quad.min_x, quad.min_y, 0.0, 1.0),
        v(quad.max_x, quad.min_y, 1.0, 1.0),
        v(quad.min_x, quad.max_y, 0.0, 0.0),
        v(quad.max_x, quad.min_y, 1.0, 1.0),
        v(quad.max_x, quad.max_y, 1.0, 0.0),
    ]
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex data layout (32 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  uv     [f32; 2]   loc 1
///  offset 16  color  [f32; 4]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct TextVertex {
    pos: [f32; 2],
    uv: [f32; 2],
    color: [f32; 4],
}

impl TextVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TextVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
