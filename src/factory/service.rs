use crate::logger::{Logger, LoggerFactory};
use crate::messages;

pub const NAME: &str = "LoggerFactoryService";

pub struct Service {
    log: Logger,
}

impl Service {
    pub fn new() -> Self {
        Self {
            log: LoggerFactory::get_logger(NAME),
        }
    }

    pub fn save(&self) {
        self.log.trace(messages::TRACE);
        self.log.debug(messages::DEBUG);
        self.log.info(messages::INFO);
        self.log.warn(messages::WARN);
        self.log.error(messages::ERROR);
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}
