use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use radio_panel_core::geometry::{
    self, CIRCLE_RADIUS, CIRCLE_SEGMENTS, GRID_RINGS, RECT_INDICES,
};
use radio_panel_core::scene::{DrawCmd, DrawList};

use crate::render::{RenderCtx, RenderTarget};

/// Renderer for `DrawCmd::Circle`, `DrawCmd::Rect` and `DrawCmd::Grid`.
///
/// All three share one shader and one instance stream; they differ only in
/// primitive topology, so the renderer keeps a fill pipeline (triangles), a
/// ring pipeline (line strips) and a spoke pipeline (line lists) and switches
/// between them while walking the draw list in paint order.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    ring_pipeline: Option<wgpu::RenderPipeline>,
    spoke_pipeline: Option<wgpu::RenderPipeline>,

    circle_vbo: Option<wgpu::Buffer>,
    circle_ibo: Option<wgpu::Buffer>,
    circle_index_count: u32,
    rect_vbo: Option<wgpu::Buffer>,
    rect_ibo: Option<wgpu::Buffer>,
    grid_vbo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

/// What a single draw-list entry turns into once its instance is staged.
enum MeshDraw {
    Circle,
    Rect,
    Grid,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.ensure_pipelines(ctx);
        self.ensure_static_buffers(ctx);

        let mut instances: Vec<MeshInstance> = Vec::new();
        let mut draws: Vec<MeshDraw> = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Circle(cmd) => {
                    if cmd.scale <= 0.0 {
                        continue;
                    }
                    instances.push(MeshInstance {
                        offset: [cmd.center.x, cmd.center.y],
                        scale: [cmd.scale, cmd.scale],
                        color: [cmd.color.r, cmd.color.g, cmd.color.b, 1.0],
                    });
                    draws.push(MeshDraw::Circle);
                }
                DrawCmd::Rect(cmd) => {
                    instances.push(MeshInstance {
                        offset: [cmd.center.x, cmd.center.y],
                        scale: [cmd.size.x, cmd.size.y],
                        color: [cmd.color.r, cmd.color.g, cmd.color.b, 1.0],
                    });
                    draws.push(MeshDraw::Rect);
                }
                DrawCmd::Grid(cmd) => {
                    instances.push(MeshInstance {
                        offset: [cmd.center.x, cmd.center.y],
                        scale: [1.0, 1.0],
                        color: [cmd.color.r, cmd.color.g, cmd.color.b, 1.0],
                    });
                    draws.push(MeshDraw::Grid);
                }
                DrawCmd::Text(_) => {}
            }
        }

        if instances.is_empty() {
            return;
        }

        self.ensure_instance_capacity(ctx, instances.len());
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let Some(fill_pipeline) = self.fill_pipeline.as_ref() else { return };
        let Some(ring_pipeline) = self.ring_pipeline.as_ref() else { return };
        let Some(spoke_pipeline) = self.spoke_pipeline.as_ref() else { return };
        let Some(circle_vbo) = self.circle_vbo.as_ref() else { return };
        let Some(circle_ibo) = self.circle_ibo.as_ref() else { return };
        let Some(rect_vbo) = self.rect_vbo.as_ref() else { return };
        let Some(rect_ibo) = self.rect_ibo.as_ref() else { return };
        let Some(grid_vbo) = self.grid_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("panel mesh pass"),
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

        rpass.set_vertex_buffer(1, instance_vbo.slice(..));

        for (k, draw) in draws.iter().enumerate() {
            let k = k as u32;
            match draw {
                MeshDraw::Circle => {
                    rpass.set_pipeline(fill_pipeline);
                    rpass.set_vertex_buffer(0, circle_vbo.slice(..));
                    rpass.set_index_buffer(circle_ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..self.circle_index_count, 0, k..k + 1);
                }
                MeshDraw::Rect => {
                    rpass.set_pipeline(fill_pipeline);
                    rpass.set_vertex_buffer(0, rect_vbo.slice(..));
                    rpass.set_index_buffer(rect_ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..RECT_INDICES.len() as u32, 0, k..k + 1);
                }
                MeshDraw::Grid => {
                    rpass.set_pipeline(ring_pipeline);
                    rpass.set_vertex_buffer(0, grid_vbo.slice(..));
                    for ring in 0..GRID_RINGS {
                        rpass.draw(geometry::grid_ring_range(ring), k..k + 1);
                    }
                    rpass.set_pipeline(spoke_pipeline);
                    rpass.draw(geometry::grid_spoke_range(GRID_RINGS), k..k + 1);
                }
            }
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.fill_pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("panel mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/panel.wgsl").into()),
        });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("panel mesh pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let make = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[MeshVertex::layout(), MeshInstance::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
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
            })
        };

        self.fill_pipeline = Some(make("panel fill pipeline", wgpu::PrimitiveTopology::TriangleList));
        self.ring_pipeline = Some(make("panel ring pipeline", wgpu::PrimitiveTopology::LineStrip));
        self.spoke_pipeline = Some(make("panel spoke pipeline", wgpu::PrimitiveTopology::LineList));
        self.pipeline_format = Some(ctx.surface_format);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.circle_vbo.is_some() {
            return;
        }

        let circle = geometry::build_circle(CIRCLE_RADIUS, CIRCLE_SEGMENTS);
        let circle_indices = geometry::fan_indices(circle.len() as u32);
        self.circle_index_count = circle_indices.len() as u32;
        self.circle_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel circle vbo"),
            contents: bytemuck::cast_slice(&circle),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.circle_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel circle ibo"),
            contents: bytemuck::cast_slice(&circle_indices),
            usage: wgpu::BufferUsages::INDEX,
        }));

        let rect = geometry::build_rect();
        self.rect_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel rect vbo"),
            contents: bytemuck::cast_slice(&rect),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.rect_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel rect ibo"),
            contents: bytemuck::cast_slice(&RECT_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));

        let grid = geometry::build_grid(GRID_RINGS);
        self.grid_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel grid vbo"),
            contents: bytemuck::cast_slice(&grid),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(64);
        let new_size = (new_cap * std::mem::size_of::<MeshInstance>()) as u64;
        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("panel mesh instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshVertex {
    pos: [f32; 2],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Instance data layout (32 bytes):
///
///  offset  0  offset  [f32; 2]   loc 1
///  offset  8  scale   [f32; 2]   loc 2
///  offset 16  color   [f32; 4]   loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshInstance {
    offset: [f32; 2],
    scale: [f32; 2],
    color: [f32; 4],
}

impl MeshInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // offset
        2 => Float32x2, // scale
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
