//! # State Module
//!
//! Shared application state read by the pages.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Pages take exactly the handles they need
//! 3. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌───────────────────┬────────────────────┐                     │
//! │          ▼                   ▼                    ▼                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  BookStore   │  │ SessionState │  │  ActionSender    │              │
//! │  │              │  │              │  │  (actions.rs)    │              │
//! │  │  watch chan  │  │  Arc<RwLock< │  │  mpsc pipeline   │              │
//! │  │  of book     │  │    Session   │  │  for borrow      │              │
//! │  │  snapshots   │  │  >>          │  │  intents         │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • BookStore/SessionState: written by external collaborators only;     │
//! │    pages take lock-free snapshot reads                                 │
//! │  • ActionSender: pages write intents, never observe results            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod session;
mod store;

pub use session::SessionState;
pub use store::{BookStore, BooksSnapshot};
