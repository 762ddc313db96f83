//! # VOXPAINT
//!
//! Headless renderer: loads a scene, renders frames into a CPU framebuffer
//! holding a fixed set of movement keys, and reports.
//!
//! Run with: cargo run --release --bin voxpaint -- data/voxpaint.toml --frames 60 --keys w

use voxpaint::cli::USAGE;
use voxpaint::core::RendererConfig;
use voxpaint::{App, AppResult, RunOptions, SessionStats};

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         VOXPAINT - PAINTER'S ALGORITHM VOXEL RENDERER            ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let options = match RunOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            println!("Error: {e}");
            println!();
            println!("Usage: {USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(options: &RunOptions) -> AppResult<()> {
    let config = match &options.config {
        Some(path) => {
            println!("Loading config: {}", path.display());
            RendererConfig::load(path)?
        }
        None => {
            println!("Using built-in demo scene");
            RendererConfig::default()
        }
    };

    let mut app = App::new(&config)?;
    println!(
        "Scene: {} voxels in a {:?} grid, camera at {:?}",
        app.grid().solid_count(),
        app.grid().dims(),
        app.camera().position
    );
    println!("Rendering {} frames holding keys: {}", options.frames, options.keys);
    println!();

    for _ in 0..options.frames {
        let stats = app.tick(options.keys)?;
        let [x, y, z] = app.camera().position;
        println!(
            "  frame {:>4}  camera ({x:.3}, {y:.3}, {z:.3})  drawn {:>3}  culled {:>3}",
            stats.frame,
            stats.faces_drawn,
            stats.faces_culled()
        );
    }

    print_summary(app.session(), &app);

    if let Some(path) = &options.ppm {
        app.framebuffer().save_ppm(path)?;
        println!("Saved last frame: {}", path.display());
    }

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn print_summary(session: &SessionStats, app: &App) {
    let last = app.framebuffer();
    println!();
    println!("┌─ SESSION ──────────────────────────────────────────────────────┐");
    println!("│ Frames Rendered:    {}", session.frames_recorded);
    println!("│ Average Frame:      {:.3} ms ({:.1} FPS)", session.avg_frame_ms(), session.avg_fps());
    if session.frames_recorded > 0 {
        println!("│ Min Frame:          {:.3} ms", session.min_frame_us as f64 / 1000.0);
        println!("│ Max Frame:          {:.3} ms", session.max_frame_us as f64 / 1000.0);
    }
    println!("│ Faces Drawn/Frame:  {:.1}", session.avg_faces_drawn());
    println!("│ Faces Culled:       {}", session.faces_culled_sum);
    println!("│ Surface:            {}x{}", last.width(), last.height());
    println!("└──────────────────────────────────────────────────────────────────┘");
}
