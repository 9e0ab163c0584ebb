use super::Service;
use crate::logger::{Logger, LoggerFactory};
use crate::messages;

pub const NAME: &str = "LoggerFactoryController";

/// Logs through a handle obtained from the factory at construction, then
/// delegates to its [`Service`].
pub struct Controller {
    log: Logger,
    service: Service,
}

impl Controller {
    pub fn new(service: Service) -> Self {
        Self {
            log: LoggerFactory::get_logger(NAME),
            service,
        }
    }

    pub fn save(&self) -> &'static str {
        self.log.trace(messages::TRACE);
        self.log.debug(messages::DEBUG);
        self.log.info(messages::INFO);
        self.log.warn(messages::WARN);
        self.log.error(messages::ERROR);

        self.service.save();

        messages::ACK
    }
}
