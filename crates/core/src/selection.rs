//! Track selection state: which tracks are selected and how click gestures
//! change that.
//!
//! Selection is a property of a whole linked group. Operations that take a
//! track to (de)select expect the group's leader and propagate the flag to
//! every channel of the group. Passing a follower, or an id the list does not
//! contain, is a caller bug and panics.

use daw_tracks::{Track, TrackId, TrackList};

use crate::view_info::ViewInfo;

/// Session-lifetime selection state.
///
/// The only thing remembered between gestures is the last explicitly picked
/// track, used as the anchor for shift-click range extension. It is stored as
/// a [`TrackId`] and resolved against the list on every use, so removing the
/// track elsewhere just makes the anchor disappear.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub(crate) last_picked: Option<TrackId>,
}

fn lookup(tracks: &TrackList, id: TrackId) -> &Track {
    match tracks.get(id) {
        Some(track) => track,
        None => panic!("track {id} is not in the track list"),
    }
}

fn assert_leader(tracks: &TrackList, id: TrackId) {
    assert!(
        lookup(tracks, id).is_leader(),
        "track {id} is not the leader of its group"
    );
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shift-click anchor, if it still refers to a live leader track.
    pub fn last_picked(&self, tracks: &TrackList) -> Option<TrackId> {
        self.last_picked
            .filter(|&id| tracks.get(id).is_some_and(Track::is_leader))
    }

    /// Set the selectedness of `track`'s whole linked group.
    ///
    /// With `update_last_picked`, selecting makes `track` the anchor and
    /// deselecting the current anchor forgets it.
    ///
    /// # Panics
    ///
    /// Panics if `track` is not a leader.
    pub fn select_track(
        &mut self,
        tracks: &mut TrackList,
        track: TrackId,
        selected: bool,
        update_last_picked: bool,
    ) {
        assert_leader(tracks, track);

        for channel in tracks.channels_mut(track) {
            channel.set_selected(selected);
        }

        if update_last_picked {
            if selected {
                self.last_picked = Some(track);
            } else if self.last_picked == Some(track) {
                self.last_picked = None;
            }
        }
        tracing::trace!(%track, selected, update_last_picked, "Track selection set");
    }

    /// Select every group with a track in the inclusive range between
    /// `s_track` and `e_track`, given in either order. Nothing outside the
    /// range is deselected and the anchor is left alone.
    pub fn select_range_of_tracks(
        &mut self,
        tracks: &mut TrackList,
        s_track: TrackId,
        e_track: TrackId,
    ) {
        let (Some(s), Some(e)) = (tracks.index_of(s_track), tracks.index_of(e_track)) else {
            panic!("range ends {s_track} and {e_track} must both be in the track list");
        };
        let (first, last) = (s.min(e), s.max(e));

        let mut leaders: Vec<TrackId> = tracks
            .iter()
            .skip(first)
            .take(last - first + 1)
            .map(Track::leader)
            .collect();
        leaders.dedup();

        for leader in leaders {
            self.select_track(tracks, leader, true, false);
        }
        tracing::trace!(from = %s_track, to = %e_track, "Range selected");
    }

    /// Deselect every track. The anchor is kept.
    pub fn select_none(&mut self, tracks: &mut TrackList) {
        for track in tracks.iter_mut() {
            track.set_selected(false);
        }
    }

    /// Replace the selection by the range from the anchor to `track`.
    ///
    /// The anchor itself does not move, so consecutive shift-clicks all
    /// extend from the same track. Without a live anchor this behaves like a
    /// plain click on `track`'s group.
    pub fn change_selection_on_shift_click(&mut self, tracks: &mut TrackList, track: TrackId) {
        match self.last_picked(tracks) {
            Some(anchor) => {
                self.select_none(tracks);
                self.select_range_of_tracks(tracks, anchor, track);
            }
            None => {
                let leader = lookup(tracks, track).leader();
                tracing::debug!(%leader, "No shift-click anchor, selecting single track");
                self.select_none(tracks);
                self.select_track(tracks, leader, true, true);
            }
        }
    }

    /// Apply a click on a track's entry in the track list.
    ///
    /// Shift extends from the anchor, ctrl toggles `track` alone, and a plain
    /// click selects only `track`, makes it the anchor and selects its length
    /// on the timeline. Shift without a live anchor is a plain click.
    /// `sync_locked` is handed on to [`SelectionState::select_track_length`];
    /// no extra tracks are selected because of it.
    ///
    /// # Panics
    ///
    /// Panics if `track` is not a leader.
    pub fn handle_list_selection(
        &mut self,
        tracks: &mut TrackList,
        view_info: &mut ViewInfo,
        track: TrackId,
        shift: bool,
        ctrl: bool,
        sync_locked: bool,
    ) {
        assert_leader(tracks, track);
        tracing::debug!(%track, shift, ctrl, sync_locked, "List selection");

        if shift && self.last_picked(tracks).is_some() {
            self.change_selection_on_shift_click(tracks, track);
        } else if ctrl && !shift {
            let selected = lookup(tracks, track).is_selected();
            self.select_track(tracks, track, !selected, true);
        } else {
            self.select_none(tracks);
            self.select_track(tracks, track, true, true);
            Self::select_track_length(view_info, tracks, track, sync_locked);
        }
    }

    /// Set the view's selected time range to the content extent of `track`'s
    /// linked group. Selected flags are not touched.
    pub fn select_track_length(
        view_info: &mut ViewInfo,
        tracks: &TrackList,
        track: TrackId,
        sync_locked: bool,
    ) {
        let leader = lookup(tracks, track).leader();
        let start = tracks.channels(leader).map(Track::start_tick).min().unwrap_or(0);
        let end = tracks.channels(leader).map(Track::end_tick).max().unwrap_or(0);

        view_info.set_selected_region(start, end);
        tracing::trace!(%track, start, end, sync_locked, "Selected track length");
    }
}
