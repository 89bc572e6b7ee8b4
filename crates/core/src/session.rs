use std::path::Path;

use crate::changer::SelectionStateChanger;
use crate::config::SelectionConfig;
use crate::selection::SelectionState;
use crate::view_info::{SelectedRegion, ViewInfo};
use daw_tracks::{Track, TrackId, TrackList, TrackListError};

/// Keyboard modifiers held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
    };
}

/// Editing session: the tracks, what is selected, and the view's time selection.
pub struct Session {
    tracks: TrackList,
    selection: SelectionState,
    view_info: ViewInfo,
    config: SelectionConfig,
}

impl Session {
    pub fn new(tracks: TrackList, config: SelectionConfig) -> Self {
        Self {
            tracks,
            selection: SelectionState::new(),
            view_info: ViewInfo::new(),
            config,
        }
    }

    pub fn from_config_path(tracks: TrackList, path: &Path) -> anyhow::Result<Self> {
        let config = SelectionConfig::load_from(path)?;
        Ok(Self::new(tracks, config))
    }

    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    /// Mutable access for edits other than selection. Must not be used while
    /// a gesture from [`Session::begin_gesture`] is open.
    pub fn tracks_mut(&mut self) -> &mut TrackList {
        &mut self.tracks
    }

    pub fn selected_region(&self) -> SelectedRegion {
        self.view_info.selected_region()
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn set_sync_locked(&mut self, sync_locked: bool) {
        self.config.sync_locked = sync_locked;
    }

    pub fn last_picked(&self) -> Option<TrackId> {
        self.selection.last_picked(&self.tracks)
    }

    /// Leaders of the selected groups, in list order.
    pub fn selected_tracks(&self) -> Vec<TrackId> {
        self.tracks.selected_leaders().map(Track::id).collect()
    }

    /// Tracks a batch edit of the current selection has to touch, honouring
    /// the configured sync-lock setting.
    pub fn sync_lock_selected_tracks(&self) -> Vec<TrackId> {
        self.tracks
            .iter()
            .map(Track::id)
            .filter(|&id| self.tracks.is_sync_lock_selected(id, self.config.sync_locked))
            .collect()
    }

    /// Click on a track's entry in the track list.
    pub fn click_track(&mut self, track: TrackId, modifiers: Modifiers) {
        self.selection.handle_list_selection(
            &mut self.tracks,
            &mut self.view_info,
            track,
            modifiers.shift,
            modifiers.ctrl,
            self.config.sync_locked,
        );
    }

    /// Select every track without moving the shift-click anchor.
    pub fn select_all(&mut self) {
        let leaders: Vec<TrackId> = self.tracks.leaders().map(Track::id).collect();
        for leader in leaders {
            self.selection.select_track(&mut self.tracks, leader, true, false);
        }
    }

    pub fn select_none(&mut self) {
        self.selection.select_none(&mut self.tracks);
    }

    /// Start a gesture whose selection changes are undone unless committed.
    pub fn begin_gesture(&mut self) -> SelectionStateChanger<'_> {
        SelectionStateChanger::new(&mut self.selection, &mut self.tracks)
    }

    /// Remove a linked group. If it was the shift-click anchor, the anchor
    /// is gone too.
    pub fn remove_track(&mut self, leader: TrackId) -> Result<Vec<Track>, TrackListError> {
        self.tracks.remove_group(leader)
    }
}
