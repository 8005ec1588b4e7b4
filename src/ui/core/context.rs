use std::sync::Arc;

use crate::{
    api::DataProvider,
    config::Config,
    icons::IconService,
    logger::Logger,
    session::Session,
    theme::{ThemeStore, TerminalChrome},
};

/// Shared services and state injected into the application component.
///
/// Constructed once at startup; the theme store and session live here so
/// there is exactly one instance of each per application run.
pub struct AppContext {
    pub provider: Arc<dyn DataProvider>,
    pub config: Config,
    pub session: Session,
    pub theme: ThemeStore,
    pub chrome: TerminalChrome,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(provider: Arc<dyn DataProvider>, config: Config) -> Self {
        Self {
            provider,
            config,
            session: Session::new(),
            theme: ThemeStore::load(),
            chrome: TerminalChrome::new(),
            icons: IconService::default(),
            logger: Logger::new(),
        }
    }
}
