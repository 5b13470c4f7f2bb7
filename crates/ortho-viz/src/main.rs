use anyhow::Context;
use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use ortho_scene::color::DIM_GRAY;
use ortho_scene::{FramePacer, RenderSurface, Space, Spin};
use ortho_viz::cli::Cli;
use ortho_viz::{MacroquadSurface, Viewport, build_space, run_headless};

fn window_conf() -> Conf {
    Conf {
        window_title: "3D view".to_owned(),
        window_width: 300,
        window_height: 300,
        ..Default::default()
    }
}

async fn run_window(mut space: Space, spin: Spin, mut pacer: FramePacer) -> anyhow::Result<()> {
    prevent_quit();

    let mut surface = MacroquadSurface::acquire(Viewport::default())
        .context("failed to attach to the window")?;

    while !surface.is_closed() {
        surface.clear(DIM_GRAY);
        space.draw(&mut surface);
        spin.apply(&mut space);
        surface.present().await;

        let wait = pacer.tick();
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }

    info!("window closed after {} frames", pacer.frames());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut space = build_space(cli.scene, cli.draw_order.into(), cli.tilt)
        .context("failed to build scene")?;
    let spin = cli.per_frame_spin();

    if let Some(frames) = cli.headless {
        let surface = run_headless(&mut space, spin, frames);
        info!(
            "headless run finished: {} commands in last frame",
            surface.commands().len()
        );
        return Ok(());
    }

    info!("opening window: {:?}, {} ms per frame", spin, cli.frame_ms);
    let pacer = FramePacer::new(cli.frame_length());
    // macroquad owns the event loop, so a setup failure inside it ends the process here.
    macroquad::Window::from_config(window_conf(), async move {
        if let Err(err) = run_window(space, spin, pacer).await {
            error!("{err:#}");
            std::process::exit(1);
        }
    });
    Ok(())
}
