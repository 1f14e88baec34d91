use std::{
    sync::mpsc,
    sync::{Arc, Mutex},
    thread,
};

use tracing::trace;

use crate::error::SortError;

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

/// Fixed set of worker threads pulling boxed jobs from a shared channel.
/// Dropping the pool closes the channel and joins every worker.
pub struct ThreadPool {
    workers: Vec<Worker>,
    sender: Option<mpsc::Sender<Job>>,
}

impl ThreadPool {
    pub fn new(n: usize) -> Result<ThreadPool, SortError> {
        if n == 0 {
            return Err(SortError::InvalidThreadCount(n));
        }
        let mut workers = Vec::with_capacity(n);
        let (sender, receiver) = mpsc::channel();
        let rc = Arc::new(Mutex::new(receiver));
        for id in 0..n {
            let rc = Arc::clone(&rc);
            workers.push(Worker::new(id, rc)?);
        }

        Ok(ThreadPool {
            workers,
            sender: Some(sender),
        })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn execute<F: FnOnce() + Send + 'static>(&self, f: F) -> Result<(), SortError> {
        let sender = self.sender.as_ref().ok_or(SortError::WorkerDisconnected)?;
        sender
            .send(Box::new(f))
            .map_err(|_| SortError::WorkerDisconnected)
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        drop(self.sender.take());
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    trace!(worker = worker.id, "worker panicked");
                }
            }
        }
    }
}

impl Worker {
    fn new(id: usize, rc: Arc<Mutex<mpsc::Receiver<Job>>>) -> Result<Worker, SortError> {
        let thread = thread::Builder::new()
            .name(format!("merge-worker-{id}"))
            .spawn(move || {
                trace!(worker = id, "worker started");
                loop {
                    let message = match rc.lock() {
                        Ok(receiver) => receiver.recv(),
                        Err(_) => break,
                    };

                    match message {
                        Ok(job) => job(),
                        Err(_) => break,
                    };
                }
                trace!(worker = id, "worker stopped");
            })
            .map_err(SortError::WorkerSpawn)?;
        Ok(Worker {
            id,
            thread: Some(thread),
        })
    }
}
