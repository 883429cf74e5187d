//! Flick Roll entry point
//!
//! Native demo: replays synthetic swipes through the gesture controller and
//! prints the launches they produce. Pass a JSON config path to tune the
//! feel without recompiling.

use glam::{Vec2, Vec3};

use flick_roll::world::world_path_from_samples;
use flick_roll::{
    CameraFrame, LaunchBody, LaunchParameters, LaunchScene, SwipeConfig, SwipeController, Viewport,
};

struct DemoBall {
    velocity: Vec3,
    angular_velocity: Vec3,
}

impl LaunchBody for DemoBall {
    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn apply_launch(&mut self, launch: &LaunchParameters) {
        self.velocity = launch.velocity();
        self.angular_velocity = launch.spin;
    }
}

fn main() {
    env_logger::init();
    log::info!("Flick Roll demo starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => SwipeConfig::from_json(&json),
            Err(e) => {
                log::warn!("Could not read {path}: {e}, using defaults");
                SwipeConfig::default()
            }
        },
        None => SwipeConfig::default(),
    };

    let viewport = Viewport::new(1280.0, 720.0);
    let scene = LaunchScene {
        camera: Some(CameraFrame::new(Vec3::X, Vec3::Z)),
        face_forward: Some(Vec3::Z),
        body_forward: Vec3::Z,
        body_position: Vec3::ZERO,
    };
    let mut controller = SwipeController::new(config);
    let mut ball = DemoBall {
        velocity: Vec3::ZERO,
        angular_velocity: Vec3::ZERO,
    };

    println!("\nStraight flick:");
    replay_swipe(&mut controller, &mut ball, &scene, viewport, |t| {
        Vec2::new(640.0, 150.0 + 1400.0 * t as f32)
    });

    // Still rolling from the first launch, so this press must be ignored
    let pressed = controller.on_press_start(Vec2::new(640.0, 150.0), viewport, 10.0, &ball);
    println!("\nPress while rolling accepted: {pressed}");

    ball.velocity = Vec3::ZERO;
    println!("\nHooked flick:");
    replay_swipe(&mut controller, &mut ball, &scene, viewport, |t| {
        let y = 1400.0 * t as f32;
        let x = if y > 175.0 { -0.6 * (y - 175.0) } else { 0.0 };
        Vec2::new(640.0 + x, 150.0 + y)
    });
}

fn replay_swipe(
    controller: &mut SwipeController,
    ball: &mut DemoBall,
    scene: &LaunchScene,
    viewport: Viewport,
    position_at: impl Fn(f64) -> Vec2,
) {
    if !controller.on_press_start(position_at(0.0), viewport, 0.0, ball) {
        println!("  press rejected");
        return;
    }
    let dt = 1.0 / 120.0;
    let mut t = dt;
    while t < 0.25 {
        controller.tick(position_at(t), viewport, t);
        t += dt;
    }

    let path = world_path_from_samples(controller.samples(), scene, controller.config());
    println!("  recorded {} samples, {} path points", controller.samples().len(), path.len());

    match controller.on_press_end(scene, 0.25, ball) {
        Some(launch) => {
            println!(
                "  ✓ launched dir={:.3} speed={:.2} spin={:.2}",
                launch.direction, launch.speed, launch.spin
            );
            println!("  ball velocity {:.2}, angular {:.2}", ball.velocity, ball.angular_velocity);
        }
        None => println!("  no launch"),
    }
}
