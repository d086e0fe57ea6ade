use crate::gpu::GpuContext;
use crate::input::InputState;
use crate::tracker::{BrowserClock, PageEventSink};
use crate::ui::pyramid::ViewTransform;
use crate::ui::{self, flow::FlowStep, UiState};
use std::cell::RefCell;
use std::rc::Rc;
use strata_core::level::LevelTable;
use strata_layout::{build_scene, hit, LayoutConfig};
use strata_track::{LogSink, ProgressLog};
use wasm_bindgen::prelude::*;

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Main application struct. Owns all subsystems; the layout engine
/// itself stays stateless and is re-invoked every frame.
pub struct Application {
    gpu: GpuContext,
    ui_state: UiState,
    input: Rc<RefCell<InputState>>,
    table: &'static LevelTable,
    config: LayoutConfig,
    selected: Option<u8>,
    hovered: Option<u8>,
    tracking: bool,
    progress: ProgressLog,
    last_frame_time: f64,
}

impl Application {
    pub fn new(gpu: GpuContext, dpi_scale: f32, input: Rc<RefCell<InputState>>) -> Self {
        let ui_state = UiState::new(&gpu.device, gpu.surface_format, dpi_scale);

        let mut progress = ProgressLog::new(Box::new(BrowserClock));
        progress.add_sink(Box::new(LogSink));
        progress.add_sink(Box::new(PageEventSink));

        let table = LevelTable::builtin();
        for warning in table.monotonicity_warnings() {
            log::warn!("level data: {warning}");
        }

        Self {
            gpu,
            ui_state,
            input,
            table,
            config: LayoutConfig::default(),
            selected: Some(0),
            hovered: None,
            tracking: true,
            progress,
            last_frame_time: 0.0,
        }
    }

    /// Start the requestAnimationFrame loop.
    /// Creates the rAF closure ONCE (no closure leak per frame).
    pub fn start_loop(app: Rc<RefCell<Self>>) {
        let closure: RafClosure = Rc::new(RefCell::new(None));
        let closure_clone = closure.clone();

        let window = web_sys::window().expect("no global window");

        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let mut app_ref = app.borrow_mut();

            let delta = timestamp - app_ref.last_frame_time;

            // Skip frame if tab was backgrounded (>100ms gap)
            if app_ref.last_frame_time > 0.0 && delta > 100.0 {
                app_ref.last_frame_time = timestamp;
                schedule_next(&closure_clone);
                return;
            }

            app_ref.last_frame_time = timestamp;
            app_ref.render_frame();

            schedule_next(&closure_clone);
        }) as Box<dyn FnMut(f64)>));

        // Kick off first frame
        window
            .request_animation_frame(
                closure
                    .borrow()
                    .as_ref()
                    .expect("rAF closure missing")
                    .as_ref()
                    .unchecked_ref(),
            )
            .expect("rAF registration failed");
    }

    /// Render a single frame: hit-test the pointer, update selection,
    /// repaint the chart, run the egui panels.
    fn render_frame(&mut self) {
        let (cursor, clicked, events) = self.input.borrow_mut().take_frame();

        let ppp = self.ui_state.ctx.pixels_per_point();
        let screen = egui::vec2(
            self.gpu.surface_config.width as f32 / ppp,
            self.gpu.surface_config.height as f32 / ppp,
        );
        let view = ViewTransform::fit(screen);

        let scene = build_scene(self.table, &self.config);

        // Pointer over an egui panel belongs to egui, not the chart.
        let pointer_free = !self.ui_state.ctx.wants_pointer_input();
        self.hovered = cursor
            .filter(|_| pointer_free)
            .and_then(|(x, y)| hit::hit_test(&scene, view.to_view(egui::pos2(x, y))));

        let clicked_level = if clicked && pointer_free {
            self.hovered
        } else {
            None
        };
        if let Some(level) = clicked_level {
            self.selected = Some(level);
            if self.tracking {
                self.progress.log_progress(level, "selected");
            }
        }

        let flow_step = FlowStep::from_frame(self.hovered, clicked_level);

        // Destructure self for disjoint field borrows inside the egui closure.
        let Application {
            gpu,
            ui_state,
            table,
            config,
            selected,
            hovered,
            tracking,
            progress,
            ..
        } = self;

        // Get surface texture, handle Lost by reconfiguring
        let output = match gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                gpu.surface.configure(&gpu.device, &gpu.surface_config);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                return;
            }
            Err(e) => {
                log::error!("Surface error: {e:?}");
                return;
            }
        };

        let view_tex = output.texture.create_view(&Default::default());

        let screen_desc =
            ui_state.screen_descriptor(gpu.surface_config.width, gpu.surface_config.height);

        let raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, screen)),
            events,
            ..Default::default()
        };

        let full_output = ui_state.ctx.run(raw_input, |ctx| {
            ui::pyramid::paint(ctx, &scene, &view, *hovered, *selected);
            ui::header::show(ctx);
            ui::flow::show(ctx, flow_step);
            ui::toolbar::show(ctx, *table, config, tracking, progress);
            ui::metrics::show(ctx, *table, *selected, *tracking);
            ui::legend::show(ctx, *table);
        });

        let clipped_primitives = ui_state
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        // GPU work
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        // 1. Clear render pass (solid color background)
        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view_tex,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.05,
                            g: 0.05,
                            b: 0.08,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        // 2. Upload egui textures and update buffers
        for (id, delta) in &full_output.textures_delta.set {
            ui_state
                .renderer
                .update_texture(&gpu.device, &gpu.queue, *id, delta);
        }

        ui_state.renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &clipped_primitives,
            &screen_desc,
        );

        // 3. egui render pass with LoadOp::Load.
        //    forget_lifetime() shifts the encoder guard from compile-time to
        //    run-time, avoiding borrow conflicts between encoder and renderer.
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui-pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view_tex,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            ui_state
                .renderer
                .render(&mut pass, &clipped_primitives, &screen_desc);
        }

        // 4. Free textures after rendering
        for id in &full_output.textures_delta.free {
            ui_state.renderer.free_texture(id);
        }

        // 5. Submit and present
        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

fn schedule_next(closure: &RafClosure) {
    let window = web_sys::window().expect("no global window");
    window
        .request_animation_frame(
            closure
                .borrow()
                .as_ref()
                .expect("rAF closure missing")
                .as_ref()
                .unchecked_ref(),
        )
        .expect("rAF registration failed");
}
