mod list;

pub use list::{TrackList, TrackListError};

/// Pulses Per Quarter Note - defines timing resolution
pub const PPQN: u64 = 960;

/// Stable handle to a track inside a [`TrackList`].
///
/// Ids are handed out monotonically and never reused, so a `TrackId` can be
/// held across edits without owning the track: once the track is removed the
/// id simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u64);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Label of a sync-lock group. Tracks sharing a label have their time-domain
/// edits kept aligned by whoever performs those edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncLockGroupId(pub u32);

/// A region of content on the timeline with explicit start and end positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub start_tick: u64,
    pub end_tick: u64,
    /// Display name for UI
    pub name: String,
}

impl Clip {
    pub fn new(name: impl Into<String>, start_tick: u64, end_tick: u64) -> Self {
        assert!(start_tick <= end_tick, "clip must not end before it starts");
        Self {
            start_tick,
            end_tick,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Track {
    id: TrackId,
    pub name: String,
    selected: bool,
    /// Id of the track representing this track's linked group. Equal to `id`
    /// for leaders.
    leader: TrackId,
    sync_lock_group: Option<SyncLockGroupId>,
    /// Always sorted by start_tick.
    clips: Vec<Clip>,
}

impl Track {
    fn new(id: TrackId, leader: TrackId, name: String) -> Self {
        Self {
            id,
            name,
            selected: false,
            leader,
            sync_lock_group: None,
            clips: Vec::new(),
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn leader(&self) -> TrackId {
        self.leader
    }

    pub fn is_leader(&self) -> bool {
        self.leader == self.id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn sync_lock_group(&self) -> Option<SyncLockGroupId> {
        self.sync_lock_group
    }

    /// Get read-only access to clips
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn insert_clip(&mut self, clip: Clip) {
        let at = self.clips.partition_point(|c| c.start_tick <= clip.start_tick);
        self.clips.insert(at, clip);
    }

    /// Earliest tick covered by content, or 0 for an empty track.
    pub fn start_tick(&self) -> u64 {
        self.clips.first().map_or(0, |c| c.start_tick)
    }

    /// Latest tick covered by content, or 0 for an empty track.
    pub fn end_tick(&self) -> u64 {
        self.clips.iter().map(|c| c.end_tick).max().unwrap_or(0)
    }
}
