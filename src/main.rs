use std::time::Instant;

use cgmath::vec3;
use log::{info, LevelFilter};

mod camera;
mod display;
mod image;
mod logger;
mod ray;
mod render;
mod scene;
mod surface;
mod types;

use camera::Camera;
use logger::init_logger;
use scene::Scene;
use surface::Surface;

const WIDTH: usize = 512;
const HEIGHT: usize = 512;
const WINDOW_TITLE: &str = "Ray Tracer";

fn main() -> anyhow::Result<()> {
    init_logger(LevelFilter::Info);

    let camera = Camera::new(vec3(0.0, 0.0, 0.0), -0.1, 0.1, -0.1, 0.1, 0.1, WIDTH, HEIGHT);

    let mut scene = Scene::new();
    scene.add(Surface::Plane { y: -2.0 });
    scene.add(Surface::Sphere { center: vec3(-4.0, 0.0, -7.0), radius: 1.0 });
    scene.add(Surface::Sphere { center: vec3(0.0, 0.0, -7.0), radius: 2.0 });
    scene.add(Surface::Sphere { center: vec3(4.0, 0.0, -7.0), radius: 1.0 });

    info!("rendering {}x{}", WIDTH, HEIGHT);
    let start = Instant::now();
    let img = render::generate_image(&camera, &scene);
    info!("render finished in {:.2?}", start.elapsed());

    display::present(WINDOW_TITLE, &img)?;
    info!("window closed, exiting");

    Ok(())
}
