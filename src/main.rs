mod error;
mod logging;
mod options;

use std::{fs, time::Instant};

use log::info;
use tsplib::Instance;

pub(crate) use error::{Error, Result};
use options::Options;

fn main() -> Result<()> {
    let now = Instant::now();
    let options = Options::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let instance = Instance::from_file(&options.input)?;
    println!("{}", summary(&instance));

    if let Some(format) = options.emit {
        let text = instance.to_tsplib(format).to_string();
        match options.output_path() {
            Some(path) => {
                fs::write(path, text)?;
                info!("emit: wrote {format} instance to {}", path.display());
            }
            None => print!("{text}"),
        }
    }

    info!(
        "output: n={} time={:.3}s",
        instance.dimension(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}

fn summary(instance: &Instance) -> String {
    let n = instance.dimension();
    let mut total: i128 = 0;
    for i in 0..n {
        for j in i + 1..n {
            total += i128::from(instance.distance(i, j));
        }
    }
    let edges = n * n.saturating_sub(1) / 2;

    format!(
        "name={} comment={} dimension={n} edges={edges} total_weight={total} display={}",
        instance.name().unwrap_or("-"),
        instance.comment().unwrap_or("-"),
        if instance.positions().is_some() { "twod" } else { "none" },
    )
}
