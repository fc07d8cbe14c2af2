use std::error::Error;
use std::path::Path;

use tracing::info;

use obstacle_grid::build_grid;
use obstacle_grid::loaders::{load_obstacles, load_scenario, resolve_data_path};
use obstacle_grid::visualization::grid_to_image;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args();
    let _binary = args.next();
    let yaml_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: rasterize <scenario.yaml> [output.png]");
            return Ok(());
        }
    };
    let output_path = args.next().unwrap_or_else(|| "grid.png".to_string());

    let yaml_path = Path::new(&yaml_path);
    let scenario = load_scenario(yaml_path)?;
    let data_path = resolve_data_path(yaml_path, &scenario.data);

    info!("loading obstacles from {}", data_path.display());
    let obstacles = load_obstacles(&data_path)?;
    info!("loaded {} obstacles", obstacles.len());

    let config = scenario.config();
    info!(
        "building grid at altitude {} with safety margin {}",
        config.altitude, config.safety_margin
    );
    let grid = build_grid(&obstacles, &config)?;
    info!(
        "grid is {}x{} cells, origin ({}, {}), {} blocked",
        grid.width(),
        grid.height(),
        grid.origin().x,
        grid.origin().y,
        grid.blocked_count()
    );

    grid_to_image(&grid).save(&output_path)?;
    info!("wrote {}", output_path);

    Ok(())
}
