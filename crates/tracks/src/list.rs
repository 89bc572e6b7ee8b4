//! Ordered collection of tracks. List order is the display order.

use crate::{SyncLockGroupId, Track, TrackId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TrackListError {
    #[error("track {0} does not exist")]
    UnknownTrack(TrackId),

    #[error("track {0} is not the leader of its group")]
    NotALeader(TrackId),
}

/// Tracks in display order.
///
/// Members of a linked group (e.g. the two channels of a stereo pair) are kept
/// contiguous: the leader comes first and its followers directly after it.
#[derive(Debug, Default)]
pub struct TrackList {
    tracks: Vec<Track>,
    next_id: u64,
}

impl TrackList {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> TrackId {
        self.next_id += 1;
        TrackId(self.next_id)
    }

    /// Append a new single-channel group and return its leader id.
    pub fn push_track(&mut self, name: impl Into<String>) -> TrackId {
        let id = self.allocate_id();
        self.tracks.push(Track::new(id, id, name.into()));
        tracing::trace!(track = %id, "Track added");
        id
    }

    /// Append a follower channel to `leader`'s linked group.
    pub fn push_channel(
        &mut self,
        leader: TrackId,
        name: impl Into<String>,
    ) -> Result<TrackId, TrackListError> {
        self.require_leader(leader)?;

        let id = self.allocate_id();
        let mut channel = Track::new(id, leader, name.into());
        // Followers share the leader's selectedness and sync-lock group.
        if let Some(lead) = self.get(leader) {
            channel.selected = lead.selected;
            channel.sync_lock_group = lead.sync_lock_group;
        }

        let at = self
            .tracks
            .iter()
            .rposition(|t| t.leader == leader)
            .map_or(self.tracks.len(), |last| last + 1);
        self.tracks.insert(at, channel);
        tracing::trace!(track = %id, %leader, "Channel added");
        Ok(id)
    }

    /// Remove a whole linked group. Ids of the removed tracks stop resolving.
    pub fn remove_group(&mut self, leader: TrackId) -> Result<Vec<Track>, TrackListError> {
        self.require_leader(leader)?;

        let (removed, kept): (Vec<Track>, Vec<Track>) = std::mem::take(&mut self.tracks)
            .into_iter()
            .partition(|t| t.leader == leader);
        self.tracks = kept;
        tracing::debug!(%leader, channels = removed.len(), "Track group removed");
        Ok(removed)
    }

    fn require_leader(&self, id: TrackId) -> Result<(), TrackListError> {
        match self.get(id) {
            None => Err(TrackListError::UnknownTrack(id)),
            Some(track) if !track.is_leader() => Err(TrackListError::NotALeader(id)),
            Some(_) => Ok(()),
        }
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.get(id).is_some()
    }

    /// Position of the track in list order.
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Track> {
        self.tracks.iter_mut()
    }

    pub fn leaders(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.is_leader())
    }

    /// Members of the linked group led by `leader`, leader first.
    pub fn channels(&self, leader: TrackId) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.leader == leader)
    }

    pub fn channels_mut(&mut self, leader: TrackId) -> impl Iterator<Item = &mut Track> {
        self.tracks.iter_mut().filter(move |t| t.leader == leader)
    }

    /// Assign a sync-lock group to a track and the rest of its linked group.
    pub fn set_sync_lock_group(
        &mut self,
        id: TrackId,
        group: Option<SyncLockGroupId>,
    ) -> Result<(), TrackListError> {
        let leader = self
            .get(id)
            .map(Track::leader)
            .ok_or(TrackListError::UnknownTrack(id))?;
        for channel in self.channels_mut(leader) {
            channel.sync_lock_group = group;
        }
        Ok(())
    }

    /// Tracks sharing `id`'s sync-lock group. A track without a group is only
    /// grouped with its own channels.
    pub fn sync_lock_group(&self, id: TrackId) -> Vec<&Track> {
        let Some(track) = self.get(id) else {
            return Vec::new();
        };
        match track.sync_lock_group {
            Some(group) => self
                .tracks
                .iter()
                .filter(|t| t.sync_lock_group == Some(group))
                .collect(),
            None => self.channels(track.leader).collect(),
        }
    }

    /// Whether a batch edit over the current selection must also touch `id`.
    ///
    /// A selected track always is. With sync-lock on, so is any track whose
    /// sync-lock group contains a selected track.
    pub fn is_sync_lock_selected(&self, id: TrackId, sync_locked: bool) -> bool {
        let Some(track) = self.get(id) else {
            return false;
        };
        if track.selected {
            return true;
        }
        sync_locked && self.sync_lock_group(id).iter().any(|t| t.selected)
    }

    pub fn selected(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.selected)
    }

    pub fn selected_leaders(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.selected && t.is_leader())
    }

    /// Selected flag of every track, in list order.
    pub fn selection_flags(&self) -> Vec<bool> {
        self.tracks.iter().map(|t| t.selected).collect()
    }

    /// Reassign selected flags positionally, in list order.
    ///
    /// Only meaningful if no track was added or removed since `flags` was
    /// captured with [`TrackList::selection_flags`]. Extra entries on either
    /// side are ignored.
    pub fn restore_selection_flags(&mut self, flags: &[bool]) {
        for (track, &selected) in self.tracks.iter_mut().zip(flags) {
            track.selected = selected;
        }
    }
}
