//! Background headline fetching.
//!
//! Runs on a dedicated thread that owns the [`HeadlinesSource`].  The main
//! loop sends a [`FetchRequest`] whenever the filters change; the worker
//! performs the blocking HTTP call and replies with a [`FetchMsg`] over an
//! [`mpsc`] channel.
//!
//! The worker is serial by construction, so at most one request is ever in
//! flight.  If the user outpaces the network (several filter changes while a
//! request blocks), the queued requests are coalesced and only the newest is
//! served; the app additionally drops any reply whose sequence number is not
//! the latest dispatched.

use std::sync::mpsc;
use std::thread;

use tracing::debug;

use crate::source::{FetchError, HeadlinesPage, HeadlinesQuery, HeadlinesSource};

/// One unit of work for the fetch worker.
pub struct FetchRequest {
    /// Monotonically increasing dispatch number, echoed back in the reply.
    pub seq: u64,
    /// Filter state captured at dispatch time.
    pub query: HeadlinesQuery,
}

/// A worker reply, tagged with the request's sequence number.
pub struct FetchMsg {
    pub seq: u64,
    pub result: Result<HeadlinesPage, FetchError>,
}

/// Spawn the fetch worker thread.
///
/// Returns the request sender and the reply receiver for the main loop.  The
/// thread exits when the request sender is dropped (channel closed), or when
/// the reply receiver is gone.
pub fn spawn(
    source: Box<dyn HeadlinesSource>,
) -> (mpsc::Sender<FetchRequest>, mpsc::Receiver<FetchMsg>) {
    let (req_tx, req_rx) = mpsc::channel::<FetchRequest>();
    let (msg_tx, msg_rx) = mpsc::channel::<FetchMsg>();

    thread::spawn(move || {
        while let Ok(mut req) = req_rx.recv() {
            // Coalesce: if more requests queued up while we were blocked,
            // only the newest reflects the current filters.
            while let Ok(newer) = req_rx.try_recv() {
                debug!(superseded = req.seq, by = newer.seq, "coalescing queued fetch");
                req = newer;
            }

            let result = source.fetch(&req.query);
            // If the receiver is gone the main thread has exited;
            // silently stop fetching.
            if msg_tx
                .send(FetchMsg {
                    seq: req.seq,
                    result,
                })
                .is_err()
            {
                return;
            }
        }
    });

    (req_tx, msg_rx)
}
