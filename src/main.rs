// What you SEE:
// • A window full of sand. The rake follows your mouse.
// • Hold Left Mouse: the rake digs in and leaves furrows.
// • 1/2/3 pick a rake (3, 4 or 5 teeth). R smooths the sand. H toggles the HUD.
// • Resizing the window lays fresh sand once you stop dragging. ESC quits.

use sand_rake::color::WHITE;
use sand_rake::config::{self, SandConfig};
use sand_rake::draw::{draw_text_5x7, Drawer};
use sand_rake::error::Error;
use sand_rake::schedule::FpsCounter;
use sand_rake::sim::Simulation;
use sand_rake::types::FrameBuffer;
use std::time::Instant;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /* --- Window setup ---
       Visual: window opens at the default size. */
    let mut drawer = Drawer::new(
        config::WINDOW_TITLE,
        config::WINDOW_WIDTH,
        config::WINDOW_HEIGHT,
        config::TARGET_FPS,
    )?;
    let (w, h) = drawer.size();

    /* --- Simulation + reusable screen buffer ---
       Visual: the sand bed; `screen` is what you actually see each frame. */
    let mut sim = Simulation::new(SandConfig::default(), w as i32, h as i32)?;
    let mut screen = FrameBuffer::new(w, h);
    let rake_names: Vec<String> = sim.rake_names().map(str::to_owned).collect();
    sim.start();

    let mut last_size = (w, h);
    let mut show_hud = true;
    let mut fps = FpsCounter::new(Instant::now());

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs → simulation */
        let size = drawer.size();
        if size != last_size {
            last_size = size;
            sim.on_resize(size.0 as i32, size.1 as i32, now); // visual: fresh sand after a short pause
        }
        if let Some((mx, my)) = drawer.mouse_pos() {
            sim.set_pointer(mx, my);
        }
        sim.set_engaged(drawer.left_mouse_down());

        if let Some(idx) = drawer.rake_key_pressed() {
            match rake_names.get(idx) {
                Some(name) => { let _ = sim.select_profile(name); } // rejection is logged
                None => log::warn!("no rake bound to key {}", idx + 1),
            }
        }
        if drawer.r_pressed_once() { sim.reset(); }
        if drawer.h_pressed_once() { show_hud = !show_hud; }

        /* 2) Simulate + draw the sand and rake */
        sim.tick(&mut screen, now);

        /* 3) HUD on top */
        if show_hud {
            let hud = format!(
                "{} | 1-3 RAKE  R RESET  H HUD | FPS: {:.1}",
                sim.active_rake().name,
                fps.last()
            );
            draw_text_5x7(&mut screen, 8, 8, &hud, WHITE);
        }

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS sample once per second */
        if let Some(sample) = fps.frame(now) {
            log::debug!("FPS: {sample:.1}");
        }
    }

    Ok(())
}
