use std::sync::Arc;

use crate::{
    config::Config,
    database::{MenuStore, UserDirectory},
    ledger::OrderLedger,
};

pub struct AppState {
    pub config: Config,
    pub menu: MenuStore,
    pub users: UserDirectory,
    pub ledger: OrderLedger,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let menu = MenuStore::new(config.menu_path.clone());
        let users = UserDirectory::new(config.user_path.clone());
        let ledger = OrderLedger::new(config.orders_path.clone());

        Arc::new(Self {
            config,
            menu,
            users,
            ledger,
        })
    }
}
