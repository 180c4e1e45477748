mod init;
mod operations;
mod schemas;
mod store;


pub use init::{init_db, migrate};
pub use operations::{
    count_progress, get_progress_by_id, get_recent_progress, insert_progress, insert_progress_at,
    progress_summary, prune_old_progress, search_progress,
};
pub use schemas::{ProgressEntry, ProgressSummary};
pub use store::ProgressStore;
