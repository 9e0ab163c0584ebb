use tracing::{debug, error, info, instrument, trace, warn};

use crate::messages;

pub const NAME: &str = "DerivedService";

#[derive(Default)]
pub struct Service;

impl Service {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "error", name = "DerivedService", skip_all)]
    pub fn save(&self) {
        trace!("{}", messages::TRACE);
        debug!("{}", messages::DEBUG);
        info!("{}", messages::INFO);
        warn!("{}", messages::WARN);
        error!("{}", messages::ERROR);
    }
}
