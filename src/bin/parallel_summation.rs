//! Repeats a partitioned sum of ten million tenths for one to seven workers.
//!
//! With one worker every run prints the same digits. With more, the combine
//! order changes between runs and so do the trailing digits.

use log::info;

use float_pitfalls::engine::report::{bits_line, sweep_run_line, workers_line};
use float_pitfalls::logging;
use float_pitfalls::prelude::*;


fn sweep<T: Precision>() -> DemoResult<()> {
    let value = tenth::<T>();

    println!("{}:", T::NAME);
    println!("{}", bits_line::<T>());
    for workers in 1..=MAX_SWEEP_WORKERS {
        let team = WorkerTeam::new(ReduceConfig::default().with_workers(workers))?;
        println!("{}", workers_line(team.workers()));
        for run in 0..PARALLEL_RUNS {
            let reduction = team.parallel_sum_by(DEFAULT_SEQUENCE_LEN, |_| value);
            println!("{}", sweep_run_line(run, reduction.total, SWEEP_DIGITS));
        }
    }
    println!();
    Ok(())
}

fn main() -> DemoResult<()> {
    let _logger = logging::init("warn")?;
    info!("parallel sweep over 1..={MAX_SWEEP_WORKERS} workers");

    sweep::<f32>()?;
    sweep::<f64>()?;
    sweep::<DoubleDouble>()?;

    info!("done");
    Ok(())
}
