use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use slidein::commands::Cmd;
use slidein::config::ConsoleConfig;
use slidein::messages::{AppMsg, Msg, SlideInMsg};
use slidein::model::{AppModel, HostOptions};
use slidein::update::update;

use super::input::key_to_msg;
use super::timers::ClearTimers;
use crate::view::Renderer;

/// Poll interval for timer and close-request messages while idle
const IDLE_TICK: Duration = Duration::from_millis(50);
/// Frame interval while the panel slides out
const ANIMATION_TICK: Duration = Duration::from_millis(16);
const SCROLL_LINE_PX: f32 = 40.0;
const BASE_TITLE: &str = "Storage Console";

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    timers: ClearTimers,
    title: String,
    quit_requested: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(config: ConsoleConfig, host_options: HostOptions) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let model = AppModel::new(config, host_options, msg_tx.clone());

        // Attach (and open the initial panel) on the first pass of the loop
        let _ = msg_tx.send(Msg::SlideIn(SlideInMsg::Attach));

        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            timers: ClearTimers::new(),
            title: String::new(),
            quit_requested: false,
            msg_tx,
            msg_rx,
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let size = window.inner_size();
        self.model.window_size = (size.width, size.height);
        self.renderer = Some(Renderer::new(window, context)?);
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            let (width, height) = self.model.window_size;
            renderer.resize(width, height)?;
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let msg = key_to_msg(&event.logical_key, self.modifiers, self.model.wide_next)?;
                update(&mut self.model, msg)
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                if self.model.is_backdrop_hit(x, y) {
                    update(&mut self.model, Msg::SlideIn(SlideInMsg::BackdropClicked))
                } else {
                    None
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * SCROLL_LINE_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                update(&mut self.model, Msg::App(AppMsg::Scroll(dy.round() as i32)))
            }
            _ => None,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::ScheduleClear {
                generation,
                delay_ms,
            } => {
                self.timers.schedule(
                    generation,
                    Duration::from_millis(delay_ms),
                    self.msg_tx.clone(),
                );
            }
            Cmd::CancelClear { generation } => {
                self.timers.cancel(generation);
            }
            Cmd::Quit => {
                self.quit_requested = true;
            }
        }
    }

    /// Run every queued message through update. Returns true if a redraw is needed.
    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Msg::SlideIn(SlideInMsg::ClearElapsed { generation }) = &msg {
                self.timers.finished(*generation);
            }
            if let Some(cmd) = update(&mut self.model, msg) {
                needs_redraw |= cmd.needs_redraw();
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    /// Window title follows the panel on screen
    fn sync_title(&mut self) {
        let title = match self.model.host.content() {
            Some(content) if self.model.host.is_open() => {
                format!("{} - {}", content.panel.title(), BASE_TITLE)
            }
            _ => format!("{} - {}", self.model.nav.current().url(), BASE_TITLE),
        };
        if title != self.title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(cmd) = update(&mut self.model, Msg::SlideIn(SlideInMsg::Dispose)) {
            self.process_cmd(cmd);
        }
        self.timers.cancel_all();
        tracing::info!("shutting down");
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(BASE_TITLE)
            .with_inner_size(LogicalSize::new(1024, 768));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        let context = match Context::new(Rc::clone(&window)) {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Failed to create graphics context: {}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.init_renderer(Rc::clone(&window), &context) {
            tracing::error!("Failed to initialise renderer: {:#}", e);
            event_loop.exit();
            return;
        }
        self.window = Some(window);
        self.context = Some(context);
        self.sync_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.shutdown(event_loop);
            return;
        }

        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        let mut should_redraw = false;
        if let Some(cmd) = self.handle_event(&event) {
            should_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
        }
        // Navigation and reference closes queue follow-up messages
        should_redraw |= self.process_async_messages();

        if self.quit_requested {
            self.shutdown(event_loop);
            return;
        }
        if should_redraw {
            self.sync_title();
            self.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.process_async_messages() {
            self.sync_title();
            self.request_redraw();
        }
        if self.quit_requested {
            self.shutdown(event_loop);
            return;
        }

        let animating = !self.model.host.is_open() && self.model.host.pending_clear().is_some();
        if animating {
            self.request_redraw();
        }
        let tick = if animating { ANIMATION_TICK } else { IDLE_TICK };
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + tick));
    }
}
