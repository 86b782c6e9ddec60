#![allow(dead_code)]

use float_pitfalls::{random_sequence, Precision, ReduceConfig, SequenceConfig, WorkerTeam};

pub const VALUES_SMALL: usize = 100_000;
pub const VALUES_MED: usize = 1_000_000;
pub const VALUES_LARGE: usize = 10_000_000;

pub const WORKER_COUNTS: [usize; 4] = [1, 2, 4, 8];

pub fn make_team(workers: usize) -> WorkerTeam {
    match WorkerTeam::new(ReduceConfig::default().with_workers(workers)) {
        Ok(team) => team,
        Err(e) => panic!("bench team with {workers} workers: {e}"),
    }
}

pub fn make_values<T: Precision>(len: usize) -> Vec<T> {
    random_sequence::<T>(&SequenceConfig::default().with_len(len))
}
