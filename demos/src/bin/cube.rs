//! Spins a lit cube in the terminal.

use std::ops::ControlFlow::Continue;

use clap::Parser;

use qr::prelude::*;
use qr_front::term::Terminal;
use quadrast_demos::{
    Chars, RenderOpts, TermOpts, init_logging, setup_lights, submit_cube,
};

#[derive(Parser, Debug)]
#[command(about = "Spins a lit cube in the terminal")]
struct Cli {
    #[command(flatten)]
    render: RenderOpts,
    #[command(flatten)]
    term: TermOpts,
    /// Number of frames to draw.
    #[arg(long, default_value_t = 300)]
    frames: usize,
    /// Frame rate cap.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let mut cli = Cli::parse();
    if cli.term.chars == Chars::Threshold {
        // A single color channel does not show the lighting
        cli.term.chars = Chars::Ramp;
    }
    let dims = cli.render.dims();

    let mut term = Terminal::stdout(dims);
    term.style = cli.term.style();
    term.ctx = cli.render.context();
    term.target_fps = Some(cli.fps);
    term.max_frames = Some(cli.frames);
    term.animate = true;

    let project = perspective(degs(45.0), cli.term.aspect(dims), 0.1, 100.0);
    let view = look_at(vec3(0.0, 2.0, 7.0), Vec3::ZERO);

    term.run(|frame| {
        let secs = frame.t.as_secs_f32();
        let pl = &mut *frame.pipeline;

        pl.set_camera(&project, &view);
        pl.rotate(rads(secs), vec3(0.0, 1.0, 0.0));
        pl.rotate(rads(secs * 0.7), vec3(1.0, 0.0, 0.3));
        setup_lights(pl);
        submit_cube(pl);
        Continue(())
    })?;
    Ok(())
}
