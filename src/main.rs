//! Fluid tank viewer entry point
//!
//! Installs the full tank scene (one ball, the particle block, the outline,
//! the light rig) and hands it to the event loop.

use fluid_tank::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = fluid_tank::default()?;

    let (width, height) = tank::WINDOW_SIZE;
    *app.scene_mut() = tank::scene(width as f32 / height as f32);

    app.run()
}
