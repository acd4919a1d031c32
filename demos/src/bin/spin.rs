//! Spins a lit cube in a window.

use std::ops::ControlFlow::Continue;

use clap::Parser;
use minifb::{Scale, WindowOptions};

use qr::prelude::*;
use qr_front::minifb::Window;
use quadrast_demos::{RenderOpts, init_logging, setup_lights, submit_cube};

#[derive(Parser, Debug)]
#[command(about = "Spins a lit cube in a window")]
struct Cli {
    #[command(flatten)]
    render: RenderOpts,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let dims @ (w, h) = cli.render.dims();

    let opts = WindowOptions {
        scale: Scale::X8,
        ..WindowOptions::default()
    };
    let mut win = Window::open("quadrast//spin", dims, opts)?;
    win.ctx = cli.render.context();

    let project = perspective(degs(45.0), w as f32 / h as f32, 0.1, 100.0);
    let view = look_at(vec3(0.0, 2.0, 6.0), Vec3::ZERO);

    win.run(|frame| {
        let secs = frame.t.as_secs_f32();
        let pl = &mut *frame.pipeline;

        pl.set_camera(&project, &view);
        pl.translate(vec3(0.0, (secs * 2.0).sin() * 0.5, 0.0));
        pl.rotate(rads(secs), vec3(0.0, 1.0, 0.0));
        setup_lights(pl);
        submit_cube(pl);
        Continue(())
    })?;
    Ok(())
}
