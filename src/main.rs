use winit::{
    event::*,
    event_loop::EventLoop,
    window::Window,
};
use clap::Parser;
use std::sync::Arc;

// Import from the library crate
use quadmotion::{
    logging, ui,
    model, view, controller,
    DemoError, DemoOptions,
};

use model::{Demo, DemoKind};
use controller::{FrameClock, FrameLoopContext, InputEvent, InputProcessor, TransformController, TransformUniform};
use controller::input::native::window_event_to_input;
use view::{GpuContext, OverlayFrame, RenderState};
use view::{render, texture};

struct App {
    // Core GPU resources
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    window: Arc<Window>,

    render_state: RenderState,

    // egui
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    show_overlay: bool,

    // Demo state
    kind: DemoKind,
    controls: Vec<&'static str>,
    frame_ctx: FrameLoopContext,
    exit_requested: bool,
}

impl App {
    async fn new(window: Arc<Window>, demo: Demo, options: &DemoOptions) -> Result<Self, DemoError> {
        let size = window.inner_size();

        // Initialize wgpu
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let gpu = GpuContext::new_native(&instance, surface, size.width, size.height).await?;

        let device = gpu.device.clone();
        let queue = gpu.queue.clone();
        let config = gpu.config.clone();
        let format = gpu.format;

        let controls = demo.controls();
        let Demo { kind, mesh, motion, mut projection, clear_color, textured, .. } = demo;
        projection.set_aspect(config.width, config.height);

        let frame_ctx = FrameLoopContext::new(
            TransformController::new(motion),
            projection,
            InputProcessor::default(),
            FrameClock::with_max_dt(options.max_frame_delta()),
        );

        // Transform uniform starts at the identity state
        let initial = TransformUniform::new(&frame_ctx.projection, &frame_ctx.transform);
        let transform_resources = render::create_transform_resources(&device, &initial);

        let image = if textured {
            texture::load_or_checkerboard(&options.texture)
        } else {
            texture::white_pixel()
        };
        let gpu_texture = texture::upload(&device, &queue, &image, "demo_texture");
        let texture_resources = render::create_texture_resources(&device, &gpu_texture);

        let shader = render::create_shader(&device).await?;
        let pipeline = render::create_demo_pipeline(
            &device,
            &shader,
            format,
            &[&transform_resources.bind_group_layout, &texture_resources.bind_group_layout],
        );

        let (depth_texture, depth_view) = render::create_depth_texture(&device, config.width, config.height);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            format,
            egui_wgpu::RendererOptions::default(),
        );

        let render_state = RenderState {
            pipeline,
            mesh: mesh.upload(&device),
            transform_buffer: transform_resources.transform_buffer,
            transform_bind_group: transform_resources.transform_bind_group,
            texture_bind_group: texture_resources.bind_group,
            depth_texture,
            depth_view,
            clear_color,
            egui_renderer,
        };

        tracing::info!(demo = kind.name(), width = config.width, height = config.height, "demo ready");

        Ok(Self {
            surface: gpu.surface,
            device,
            queue,
            config,
            size,
            window,
            render_state,
            egui_state,
            egui_ctx,
            show_overlay: true,
            kind,
            controls,
            frame_ctx,
            exit_requested: false,
        })
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        // First let egui process the event
        let egui_captured = self.egui_state.on_window_event(self.window.as_ref(), event).consumed;

        let Some(input_event) = window_event_to_input(event) else {
            return egui_captured;
        };

        // Presses egui wants (text fields) stay with egui; releases always reach us
        if egui_captured && matches!(input_event, InputEvent::KeyDown(_)) {
            return true;
        }

        if let InputEvent::KeyDown(code) = input_event {
            let processor = &self.frame_ctx.input_processor;
            if processor.is_quit(code) {
                self.exit_requested = true;
            } else if processor.wants_to_toggle_overlay(code)
                && !self.frame_ctx.input_state.is_key_pressed(code)
            {
                self.show_overlay = !self.show_overlay;
            }
        }

        self.frame_ctx.input_state.process_event(&input_event);
        matches!(input_event, InputEvent::KeyDown(_) | InputEvent::KeyUp(_))
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.render_state.resize_depth(&self.device, new_size.width, new_size.height);
            self.frame_ctx.projection.set_aspect(new_size.width, new_size.height);
        }
    }

    fn update(&mut self) {
        let (_, uniform) = self.frame_ctx.update();
        self.render_state.write_transform(&self.queue, &uniform);
    }

    fn render_ui(&mut self) -> Option<OverlayFrame> {
        // Always drain egui input so it does not pile up while hidden
        let raw_input = self.egui_state.take_egui_input(&self.window);
        if !self.show_overlay {
            return None;
        }

        let info = ui::OverlayInfo {
            demo: self.kind.name(),
            fps: self.frame_ctx.fps.fps,
            transform: &self.frame_ctx.transform,
            input: &self.frame_ctx.last_input,
            controls: &self.controls,
        };
        let output = self.egui_ctx.run(raw_input, |ctx| ui::draw_overlay(ctx, &info));

        self.egui_state.handle_platform_output(&self.window, output.platform_output);
        let pixels_per_point = self.window.scale_factor() as f32;
        let primitives = self.egui_ctx.tessellate(output.shapes, pixels_per_point);
        Some(OverlayFrame {
            primitives,
            textures_delta: output.textures_delta,
            screen_descriptor: egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.config.width, self.config.height],
                pixels_per_point,
            },
        })
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let overlay = self.render_ui();
        self.render_state.draw_frame(&self.device, &self.queue, &self.surface, overlay)
    }
}

#[allow(deprecated)]
fn run(options: DemoOptions) -> Result<(), DemoError> {
    let event_loop = EventLoop::new()?;

    let mut demo = Demo::new(options.demo, options.width, options.height);
    options.apply(&mut demo.motion);
    tracing::info!(demo = options.demo.name(), motion = ?demo.motion, "starting");

    let window_attributes = Window::default_attributes()
        .with_title(demo.title)
        .with_inner_size(winit::dpi::LogicalSize::new(options.width, options.height));
    let window = Arc::new(event_loop.create_window(window_attributes)?);

    let mut app = pollster::block_on(App::new(window, demo, &options))?;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            app.update();

                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => app.resize(app.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    tracing::error!("GPU out of memory, exiting");
                                    elwt.exit();
                                }
                                Err(e) => tracing::warn!("dropped frame: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
                if app.exit_requested {
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        }
    })?;

    tracing::info!("window closed");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let options = DemoOptions::parse();

    if let Err(e) = run(options) {
        tracing::error!("{e}");
        return Err(e.into());
    }
    Ok(())
}
