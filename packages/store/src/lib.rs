pub mod access;
pub mod board;
pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use access::{authorize, login_redirect, nav_links, Access, NavLink, Page, Viewer};
pub use board::{is_overdue, server_now, TaskBoard};
pub use config::HubConfig;
pub use models::{
    DashboardMetrics, NewUser, Project, ProjectDraft, Role, Session, Task, TaskDraft, TaskFilter,
    TaskPatch, TaskStatus, TaskUpdate, UserInfo,
};
pub use session::{KeyValueStore, SessionStore};
