use tracing::{debug, error, info, instrument, trace, warn};

use super::Service;
use crate::messages;

pub const NAME: &str = "DerivedController";

pub struct Controller {
    service: Service,
}

impl Controller {
    pub fn new(service: Service) -> Self {
        Self { service }
    }

    #[instrument(level = "error", name = "DerivedController", skip_all)]
    pub fn save(&self) -> &'static str {
        trace!("{}", messages::TRACE);
        debug!("{}", messages::DEBUG);
        info!("{}", messages::INFO);
        warn!("{}", messages::WARN);
        error!("{}", messages::ERROR);

        self.service.save();

        messages::ACK
    }
}
