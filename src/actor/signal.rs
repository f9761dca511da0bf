//! Termination signal listener.

use super::messages::ExitReason;
use crossbeam_channel::Sender;
use tracing::info;

/// Route SIGINT, SIGTERM and SIGHUP into the completion channel.
///
/// Can be installed once per process.
pub fn install(exits: Sender<ExitReason>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || notify(&exits))
}

fn notify(exits: &Sender<ExitReason>) {
    info!("termination signal received");
    let _ = exits.send(ExitReason::Signal);
}
