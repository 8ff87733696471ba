/// Main application entry point
/// Handles window creation, input, and the render loop
use blocktracer::*;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() {
    env_logger::init();

    let config = SceneConfig::default();
    let width = config.width;
    let height = config.height;

    log::info!("blocktracer starting");
    log::info!("controls: WASD move, Space/Shift up/down, arrows rotate, ESC exit");

    // Create event loop and window
    let event_loop = EventLoop::new().unwrap();
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("blocktracer")
            .with_inner_size(winit::dpi::LogicalSize::new(width as u32, height as u32))
            .with_resizable(false)
            .build(&event_loop)
            .unwrap(),
    );

    // Initialize software rendering surface
    let context = softbuffer::Context::new(window.clone()).unwrap();
    let mut surface = softbuffer::Surface::new(&context, window.clone()).unwrap();

    let mut scene = Scene::new(config, BlockPalette::default()).unwrap();
    let mut controller = CameraController::new();

    // Timing
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        let pressed = event.state == ElementState::Pressed;

                        if let PhysicalKey::Code(keycode) = event.physical_key {
                            match keycode {
                                KeyCode::KeyW => controller.forward_pressed = pressed,
                                KeyCode::KeyS => controller.backward_pressed = pressed,
                                KeyCode::KeyD => controller.right_pressed = pressed,
                                KeyCode::KeyA => controller.left_pressed = pressed,
                                KeyCode::Space => controller.up_pressed = pressed,
                                KeyCode::ShiftLeft => controller.down_pressed = pressed,
                                KeyCode::ArrowLeft => controller.turn_left_pressed = pressed,
                                KeyCode::ArrowRight => controller.turn_right_pressed = pressed,
                                KeyCode::ArrowUp => controller.pitch_up_pressed = pressed,
                                KeyCode::ArrowDown => controller.pitch_down_pressed = pressed,
                                KeyCode::Escape if pressed => {
                                    elwt.exit();
                                }
                                _ => {}
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let frame_start = Instant::now();

                        // Camera is written here, before any sampling starts.
                        scene.update(controller.translation(), controller.rotation());

                        surface
                            .resize(
                                NonZeroU32::new(width as u32).unwrap(),
                                NonZeroU32::new(height as u32).unwrap(),
                            )
                            .unwrap();

                        let mut buffer = surface.buffer_mut().unwrap();
                        scene.render(&mut buffer);
                        buffer.present().unwrap();

                        let frame_time = frame_start.elapsed();
                        if frame_time.as_millis() > 33 {
                            log::warn!("frame time: {}ms", frame_time.as_millis());
                        }

                        frame_count += 1;
                        if fps_timer.elapsed().as_secs() >= 1 {
                            log::info!("fps: {}", frame_count);
                            frame_count = 0;
                            fps_timer = Instant::now();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .unwrap();
}
