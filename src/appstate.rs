use std::sync::Arc;

use crate::{advice::ExceptionHandlers, db::Db};

pub struct AppState {
    db: Arc<Db>,
    exception_handlers: ExceptionHandlers,
}

impl AppState {
    pub fn new(db: Db) -> AppState {
        Self::with_exception_handlers(db, ExceptionHandlers::default())
    }

    pub fn with_exception_handlers(db: Db, exception_handlers: ExceptionHandlers) -> AppState {
        AppState {
            db: Arc::new(db),
            exception_handlers,
        }
    }

    pub fn get_db(&self) -> Arc<Db> {
        self.db.clone()
    }

    pub fn get_exception_handlers(&self) -> &ExceptionHandlers {
        &self.exception_handlers
    }
}
