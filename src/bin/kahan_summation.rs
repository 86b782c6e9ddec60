//! Serial, partitioned and partitioned-compensated sums of one random sequence.
//!
//! Build with `--features profiling` to write a Chrome trace of the worker
//! spans to `profile/kahan_summation.json`.

use log::info;

use float_pitfalls::engine::report::{bits_line, comparison_run_line};
use float_pitfalls::{logging, profiler};
use float_pitfalls::prelude::*;


fn compare<T: Precision>(team: &WorkerTeam) {
    let values = random_sequence::<T>(&SequenceConfig::default());

    println!("{}:", T::NAME);
    println!("{}", bits_line::<T>());
    println!("Serial sum {}", sequential_sum(&values).to_sci(5));
    println!("Parallel sum, Kahan sum");
    for run in 0..KAHAN_RUNS {
        let _span = profiler::span_fmt(format_args!("{} run {run}", T::NAME));
        let parallel = team.parallel_sum(&values);
        let kahan = team.kahan_sum(&values);
        println!(
            "{}",
            comparison_run_line(run, parallel.total, kahan.total, KAHAN_DIGITS)
        );
    }
    println!();
}

fn main() -> DemoResult<()> {
    let _logger = logging::init("warn")?;
    profiler::init("profile/kahan_summation.json");

    let team = WorkerTeam::new(ReduceConfig::default())?;
    info!("comparing strategies over {DEFAULT_SEQUENCE_LEN} values");
    println!("Parallel float test using {} threads", team.workers());

    compare::<f32>(&team);
    compare::<f64>(&team);
    compare::<DoubleDouble>(&team);

    profiler::shutdown();
    info!("done");
    Ok(())
}
