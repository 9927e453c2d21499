use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::state::DashboardState;

/// Liveness of one mounted dashboard. Closed once on teardown; every store
/// bound to it turns writes into no-ops afterwards, so responses that resolve
/// after unmount are dropped.
#[derive(Clone, Debug)]
pub struct SessionGuard {
    open: Rc<Cell<bool>>,
}

impl Default for SessionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGuard {
    pub fn new() -> Self {
        Self { open: Rc::new(Cell::new(true)) }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

/// Single source of truth for one dashboard instance.
///
/// `update` returns `None` when the write was dropped (session closed or the
/// backing state is gone); `read` returns `None` only for the latter.
pub trait StateStore: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R>;

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R>;

    fn session(&self) -> &SessionGuard;
}

/// Plain `Rc<RefCell>` store, used off-browser and in tests.
#[derive(Clone, Debug)]
pub struct LocalStore {
    state: Rc<RefCell<DashboardState>>,
    session: SessionGuard,
}

impl LocalStore {
    pub fn new(state: DashboardState, session: SessionGuard) -> Self {
        Self { state: Rc::new(RefCell::new(state)), session }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }
}

impl StateStore for LocalStore {
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        if !self.session.is_open() {
            return None;
        }
        Some(f(&mut self.state.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> Option<R> {
        Some(f(&self.state.borrow()))
    }

    fn session(&self) -> &SessionGuard {
        &self.session
    }
}
