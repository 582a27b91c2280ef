use futures::Stream;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::vec::IntoIter;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::core::types::RequestOutcome;
use crate::dispatch::checker::CheckUrl;

/// A fixed number of workers pulling URLs from one shared queue.
pub struct WorkerPool<C> {
    checker: Arc<C>,
    threads: usize,
}

impl<C> WorkerPool<C>
where
    C: CheckUrl + 'static,
{
    pub fn new(checker: Arc<C>, threads: usize) -> Self {
        Self {
            checker,
            threads: threads.max(1),
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Start the workers and return the stream of outcomes in completion
    /// order.
    ///
    /// Each worker handles one URL at a time and takes the next one only
    /// after sending the previous outcome. Dropping the returned stream
    /// aborts every worker, abandoning requests still in flight.
    pub fn spawn(&self, urls: Vec<String>) -> OutcomeStream {
        let queue = Arc::new(Mutex::new(urls.into_iter()));
        let (sender, receiver) = mpsc::channel(self.threads);
        let mut workers = JoinSet::new();

        for worker_id in 0..self.threads {
            let queue = Arc::clone(&queue);
            let sender = sender.clone();
            let checker = Arc::clone(&self.checker);

            workers.spawn(async move {
                while let Some(url) = next_url(&queue) {
                    let outcome = checker.check(url).await;
                    if sender.send(outcome).await.is_err() {
                        // Consumer is gone, stop taking work
                        break;
                    }
                }
                log::debug!("Worker {worker_id} finished");
            });
        }

        OutcomeStream { receiver, workers }
    }
}

fn next_url(queue: &Mutex<IntoIter<String>>) -> Option<String> {
    // A poisoned queue means a worker panicked mid-pop; treat it as drained
    queue.lock().ok().and_then(|mut urls| urls.next())
}

/// Outcomes delivered by the pool; ends once every worker has finished.
pub struct OutcomeStream {
    receiver: mpsc::Receiver<RequestOutcome>,
    workers: JoinSet<()>,
}

impl OutcomeStream {
    /// Stop dispatching and abandon in-flight requests.
    pub fn abort(&mut self) {
        self.receiver.close();
        self.workers.abort_all();
    }
}

impl Stream for OutcomeStream {
    type Item = RequestOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
