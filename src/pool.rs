//! Worker pool, rendezvous barrier and gather.
//!
//! Each worker opens and scans the source independently; after the barrier it
//! pushes its frozen tally onto the completion channel. The pool-owning thread
//! acts as coordinator and drains exactly one tally per worker before merging.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;

use failure::{err_msg, Error, ResultExt};
use log;

use crate::scan;
use crate::tally::Tally;

pub struct WorkerPool {
    workers: u32,
}

impl WorkerPool {
    /// A pool needs at least one worker; zero is clamped.
    pub fn new(workers: u32) -> WorkerPool {
        WorkerPool {
            workers: workers.max(1),
        }
    }

    #[inline]
    pub fn workers(&self) -> u32 {
        self.workers
    }

    /// Run the scan phase across all workers and merge their tallies.
    ///
    /// No worker's tally crosses the channel before every worker has finished
    /// scanning. A worker that never reaches the barrier stalls the run; there
    /// is deliberately no timeout.
    pub fn run(&self, source: &Path) -> Result<Tally, Error> {
        let barrier = Arc::new(Barrier::new(self.workers as usize));
        let (completion_tx, completion_rx) = mpsc::channel();

        let handles: Vec<_> = (0..self.workers)
            .map(|rank| {
                let worker = Worker {
                    rank,
                    workers: self.workers,
                    source: source.to_path_buf(),
                    barrier: Arc::clone(&barrier),
                    completion_tx: completion_tx.clone(),
                };

                thread::Builder::new()
                    .name(format!("worker-{}", rank))
                    .spawn(move || worker.run())
                    .context("Failed to spawn worker thread")
            })
            .collect::<Result<_, _>>()?;

        // The coordinator holds no sender; a vanished worker surfaces as a
        // closed channel instead of a silent short count.
        drop(completion_tx);

        log::info!("Start merging process.");

        let mut global = Tally::new();
        for _ in 0..self.workers {
            let local = completion_rx
                .recv()
                .context("A worker dropped out before the gather")?;
            global.absorb(local);
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| err_msg("A worker thread panicked"))??;
        }

        Ok(global)
    }
}

struct Worker {
    rank: u32,
    workers: u32,
    source: PathBuf,
    barrier: Arc<Barrier>,
    completion_tx: mpsc::Sender<Tally>,
}

impl Worker {
    fn run(self) -> Result<(), Error> {
        log::debug!("Worker {} starts scanning {}", self.rank, self.source.display());

        let file = File::open(&self.source).context("Missing record source file")?;
        let tally = scan::scan_shard(file, self.rank, self.workers)?;

        // Rendezvous: block until the whole group has finished scanning.
        self.barrier.wait();

        self.completion_tx
            .send(tally)
            .context("Completion channel closed before the gather")?;

        Ok(())
    }
}
