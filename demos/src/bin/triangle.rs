//! Draws a red triangle on a black background as text.

use std::ops::ControlFlow::Continue;

use clap::Parser;
use log::info;

use qr::prelude::*;
use qr_front::term::Terminal;
use quadrast_demos::{RenderOpts, TermOpts, init_logging};

#[derive(Parser, Debug)]
#[command(about = "Draws a red triangle on a black background as text")]
struct Cli {
    #[command(flatten)]
    render: RenderOpts,
    #[command(flatten)]
    term: TermOpts,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let dims = cli.render.dims();
    info!("drawing {}×{} triangle in {:?} mode", dims.0, dims.1, cli.render.mode);

    let mut term = Terminal::stdout(dims);
    term.style = cli.term.style();
    term.ctx = cli.render.context();

    let project = perspective(degs(45.0), cli.term.aspect(dims), 0.1, 100.0);
    let view = look_at(vec3(0.0, 0.0, 7.0), Vec3::ZERO);

    term.run(|frame| {
        let pl = &mut *frame.pipeline;
        pl.set_camera(&project, &view);
        pl.set_flat_color(1.0, 0.0, 0.0);
        pl.submit_vertex(-0.5, -0.5, 0.0);
        pl.submit_vertex(0.5, -0.5, 0.0);
        pl.submit_vertex(0.0, 0.5, 0.0);
        pl.submit_vertex(0.0, 0.5, 0.0);
        Continue(())
    })?;
    Ok(())
}
