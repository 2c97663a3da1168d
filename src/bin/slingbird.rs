//! Slingbird - Slingshot Arcade Game
//!
//! Drag the bird, release to fling it at the block fort, destroy all
//! the pigs. One window, one pipeline, sixty simulation ticks a second.
//!
//! Run with: `cargo run --bin slingbird`
//!
//! Controls:
//! - Left mouse drag: Aim and launch
//! - R: Restart
//! - ESC: Exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use wgpu::util::DeviceExt;

use slingbird_engine::PointerState;
use slingbird_engine::game::config::GameConfig;
use slingbird_engine::game::scene::build_scene;
use slingbird_engine::game::session::GameSession;
use slingbird_engine::game::types::{Mesh2, Vertex2};
use slingbird_engine::game::ui::Hud;

/// Simulation tick length. The session is advanced in fixed steps so
/// the physics is identical at any frame rate.
const TICK_DT: f32 = 1.0 / 60.0;

/// Largest frame delta fed into the accumulator. Keeps a long stall
/// (window drag, suspend) from unleashing thousands of catch-up ticks.
const MAX_FRAME_DT: f32 = 0.25;

const CONFIG_PATH: &str = "slingbird.json";

// ============================================================================
// GPU RESOURCES
// ============================================================================

/// Minimal GPU state for the game window.
struct GameGpu {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    /// Render pipeline for the 2D scene (vertex-colored triangles).
    scene_pipeline: wgpu::RenderPipeline,
}

impl GameGpu {
    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

struct SlingbirdApp {
    window: Option<Arc<Window>>,
    gpu: Option<GameGpu>,
    session: GameSession,
    pointer: PointerState,

    // Timing
    last_frame: Instant,
    accumulator: f32,
}

impl SlingbirdApp {
    fn new(session: GameSession) -> Self {
        Self {
            window: None,
            gpu: None,
            session,
            pointer: PointerState::new(),
            last_frame: Instant::now(),
            accumulator: 0.0,
        }
    }

    /// Initialize wgpu device and surface.
    fn initialize(&mut self, window: Arc<Window>) {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window)).unwrap();

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to find GPU adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Slingbird Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            ..Default::default()
        }))
        .expect("Failed to create GPU device");

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let present_mode = if surface_caps
            .present_modes
            .contains(&wgpu::PresentMode::AutoVsync)
        {
            wgpu::PresentMode::AutoVsync
        } else {
            surface_caps.present_modes[0]
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../shaders/scene2d.wgsl").into()),
        });

        let scene_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&scene_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex2>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0, // position
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 8,
                            shader_location: 1, // color
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // No culling for 2D geometry
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        self.gpu = Some(GameGpu {
            device,
            queue,
            surface,
            surface_config,
            scene_pipeline,
        });
        self.window = Some(window);

        println!("GPU initialized successfully");
        println!(
            "Surface format: {:?}, Present mode: {:?}",
            surface_format, present_mode
        );
    }

    /// Map a window-space cursor position onto the playfield.
    fn field_position(&self, window_pos: Vec2) -> Vec2 {
        let window_size = self
            .window
            .as_ref()
            .map(|w| {
                let s = w.inner_size();
                Vec2::new(s.width.max(1) as f32, s.height.max(1) as f32)
            })
            .unwrap_or(Vec2::new(800.0, 400.0));
        self.session
            .config()
            .field
            .from_window(window_pos, window_size)
    }

    // Mouse and touch events are normalized to these three handlers.

    fn pointer_pressed(&mut self) {
        let pos = self.pointer.press();
        self.session.pointer_down(pos);
    }

    fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer.set_position(pos);
        self.session.pointer_move(pos);
    }

    fn pointer_released(&mut self) {
        if self.pointer.release() {
            self.session.pointer_up();
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        if key == KeyCode::KeyR {
            self.session.restart();
            self.pointer.reset();
            println!("Game restarted");
        }
    }

    /// Advance the simulation by however much wall time has passed,
    /// in fixed ticks.
    fn step_simulation(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.accumulator += delta.min(MAX_FRAME_DT);
        while self.accumulator >= TICK_DT {
            self.session.tick();
            self.accumulator -= TICK_DT;
        }
    }

    /// Render a frame: scene mesh then HUD, one upload and one pass.
    fn render(&mut self) {
        let gpu = match &self.gpu {
            Some(gpu) => gpu,
            None => return,
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure surface on lost/outdated
                gpu.surface.configure(&gpu.device, &gpu.surface_config);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                eprintln!("Out of GPU memory!");
                return;
            }
            Err(e) => {
                eprintln!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let mut mesh: Mesh2 = build_scene(&self.session);
        let field = &self.session.config().field;
        mesh.merge(&Hud::build(&self.session, field.width, field.height));

        if !mesh.vertices.is_empty() && !mesh.indices.is_empty() {
            let vertex_buffer = gpu
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Scene Vertex Buffer"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let index_buffer = gpu
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Scene Index Buffer"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

            {
                let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        depth_slice: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

                pass.set_pipeline(&gpu.scene_pipeline);
                pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.indices.len() as u32, 0, 0..1);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

impl ApplicationHandler for SlingbirdApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let field = &self.session.config().field;
            let attrs = WindowAttributes::default()
                .with_title("Slingbird")
                .with_inner_size(PhysicalSize::new(field.width as u32, field.height as u32));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.initialize(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if button != MouseButton::Left {
                    return;
                }
                if state == ElementState::Pressed {
                    self.pointer_pressed();
                } else {
                    self.pointer_released();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.field_position(Vec2::new(position.x as f32, position.y as f32));
                self.pointer_moved(pos);
            }

            // Leaving the window mid-aim commits the shot, same as a
            // release.
            WindowEvent::CursorLeft { .. } => {
                self.pointer_released();
            }

            // Touch gestures map onto the same handlers as the mouse.
            WindowEvent::Touch(touch) => {
                let pos = self.field_position(Vec2::new(
                    touch.location.x as f32,
                    touch.location.y as f32,
                ));
                match touch.phase {
                    TouchPhase::Started => {
                        self.pointer_moved(pos);
                        self.pointer_pressed();
                    }
                    TouchPhase::Moved => self.pointer_moved(pos),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.pointer_moved(pos);
                        self.pointer_released();
                    }
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some(ref mut gpu) = self.gpu {
                    gpu.resize(new_size);
                }
            }

            WindowEvent::RedrawRequested => {
                self.step_simulation();
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    println!("===========================================");
    println!("   Slingbird");
    println!("===========================================");
    println!();
    println!("Controls:");
    println!("  Left mouse drag: Aim and launch");
    println!("  R: Restart");
    println!("  ESC: Exit");
    println!();

    let config = match GameConfig::load_or_default(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", CONFIG_PATH, e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SlingbirdApp::new(GameSession::new(config));
    event_loop.run_app(&mut app).unwrap();
}
