pub mod changer;
pub mod config;
pub mod selection;
pub mod session;
pub mod view_info;

pub use changer::SelectionStateChanger;
pub use config::{ConfigError, SelectionConfig};
pub use selection::SelectionState;
pub use session::{Modifiers, Session};
pub use view_info::{SelectedRegion, ViewInfo};

pub use daw_tracks::{Clip, PPQN, SyncLockGroupId, Track, TrackId, TrackList, TrackListError};
