use std::thread;
use std::time::{Duration, Instant};

use bridge_lattice::diagnostics::{format_matrix, quantize};
use bridge_lattice::render::HeightmapRenderer;
use bridge_lattice::{SimConfig, SimResult, SimulationHandle};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(SimConfig::default()) {
        log::error!("Simulation aborted: {}", e);
        std::process::exit(1);
    }
}

fn run(config: SimConfig) -> SimResult<()> {
    log::info!("Initializing bridge deck simulation...");
    log::info!(
        "Lattice: {}x{} plates, rows 0 and {} clamped",
        config.rows,
        config.cols,
        config.rows - 1
    );
    log::info!(
        "h = {}, t_max = {}, pacing = {} ms",
        config.step_size,
        config.t_max,
        config.pacing_ms
    );

    let mut handle = SimulationHandle::new(&config)?;
    let mut renderer = HeightmapRenderer::new();
    let pacing = Duration::from_millis(config.pacing_ms);
    let started = Instant::now();

    let mut dump_error = None;
    let steps = handle.run(&mut renderer, |h| {
        if log::log_enabled!(log::Level::Debug) {
            match quantize(h.state().matrix(), config.print_precision) {
                Ok(rounded) => log::debug!("{}", format_matrix(&rounded, "state")),
                Err(e) => {
                    dump_error = Some(e);
                    return false;
                }
            }
        }
        thread::sleep(pacing);
        true
    })?;

    if let Some(e) = dump_error {
        return Err(e);
    }

    log::info!(
        "Finished {} steps in {:.1?} (t = {:.3}, frames = {})",
        steps,
        started.elapsed(),
        handle.time(),
        renderer.frames()
    );
    Ok(())
}
