mod config;
pub use config::{Config, Messages};

mod controller;
pub use controller::{Controller, Dialogs, LoadReport, Outcome};

mod ids;
pub use ids::{IdGenerator, SequentialIds, UuidIds};

mod repository;
pub use repository::Repository;

mod storage;
pub use storage::{Backend, CommentStore, MemoryBackend};

mod time;
pub use time::{Clock, ManualClock, Stamper, SystemClock, Time};

pub mod view;
pub use view::{Action, BodyView, CommentView, Mode};

#[cfg(test)]
mod fixtures;

pub mod api {
    pub use remark_api::*;
}
