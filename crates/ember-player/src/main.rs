//! Headless demo session: runs the demo world for a fixed number of frames
//! with a scripted walk and prints what happened.

use anyhow::{Context, Result};
use clap::Parser;
use ember_player::Game;
use ember_runtime::Direction;

#[derive(Parser, Debug)]
#[command(name = "ember-player", about = "Run the headless demo session")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 360)]
    frames: u64,

    /// Simulated frame rate in frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");

    let mut game = Game::new().context("failed to assemble the demo world")?;
    let frame_ms = 1000.0 / args.fps;

    // Scripted input: walk right towards the first rod, then down
    for frame in 0..args.frames {
        match frame {
            0 => game.world.input.press(Direction::Right),
            96 => {
                game.world.input.release(Direction::Right);
                game.world.input.press(Direction::Down);
            }
            144 => game.world.input.release(Direction::Down),
            _ => {}
        }
        game.frame(frame as f64 * frame_ms);
    }
    game.stop();

    let hero = game.world.hero_position();
    let camera = game.world.camera_position();
    println!("Simulated {} frames at {} fps", args.frames, args.fps);
    println!("  hero at        ({:.1}, {:.1})", hero.x, hero.y);
    println!("  camera at      ({:.1}, {:.1})", camera.x, camera.y);
    println!("  items held     {}", game.world.item_count());
    println!("  rods remaining {}", game.world.remaining_rods());
    println!("  scene nodes    {}", game.world.scene.len());
    println!("  subscriptions  {}", game.world.scene.subscription_count());
    println!(
        "  draw calls in final frame: {}",
        game.world.surface.calls().len()
    );
    Ok(())
}
