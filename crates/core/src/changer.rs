//! All-or-nothing selection changes for interruptible gestures.
//!
//! A drag-select shows live feedback while the pointer moves but must leave
//! no trace if it is cancelled. Open a [`SelectionStateChanger`] when the
//! gesture starts, mutate through [`SelectionStateChanger::parts`], and call
//! [`SelectionStateChanger::commit`] only if the gesture completes. Dropping
//! an uncommitted changer puts every selected flag and the shift-click anchor
//! back the way they were.
//!
//! ```ignore
//! let mut changer = SelectionStateChanger::new(&mut state, &mut tracks);
//! let (state, tracks) = changer.parts();
//! state.select_none(tracks);
//! state.select_range_of_tracks(tracks, from, to);
//! if released_on_target {
//!     changer.commit();
//! }
//! ```

use daw_tracks::{TrackId, TrackList};

use crate::selection::SelectionState;

/// What a rollback puts back.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectionSnapshot {
    last_picked: Option<TrackId>,
    /// One flag per track, in list order.
    flags: Vec<bool>,
}

impl SelectionSnapshot {
    fn capture(state: &SelectionState, tracks: &TrackList) -> Self {
        Self {
            last_picked: state.last_picked,
            flags: tracks.selection_flags(),
        }
    }

    fn restore(&self, state: &mut SelectionState, tracks: &mut TrackList) {
        if self.flags.len() != tracks.len() {
            tracing::error!(
                captured = self.flags.len(),
                current = tracks.len(),
                "Track list changed size during a selection transaction"
            );
        }
        state.last_picked = self.last_picked;
        tracks.restore_selection_flags(&self.flags);
    }
}

/// Scoped transaction over a [`SelectionState`] and the [`TrackList`] it acts on.
///
/// The caller must not add or remove tracks while the changer is alive; only
/// selected flags may change. Rollback is positional and assumes the list
/// still has the same tracks in the same order.
///
/// Both borrows are exclusive, so a second transaction over the same state or
/// list cannot be opened while this one is live.
pub struct SelectionStateChanger<'a> {
    state: &'a mut SelectionState,
    tracks: &'a mut TrackList,
    /// `None` once committed.
    initial: Option<SelectionSnapshot>,
}

impl<'a> SelectionStateChanger<'a> {
    pub fn new(state: &'a mut SelectionState, tracks: &'a mut TrackList) -> Self {
        let initial = SelectionSnapshot::capture(state, tracks);
        tracing::trace!(tracks = initial.flags.len(), "Selection transaction opened");
        Self {
            state,
            tracks,
            initial: Some(initial),
        }
    }

    /// Selection state and track list, for performing the gesture's changes.
    pub fn parts(&mut self) -> (&mut SelectionState, &mut TrackList) {
        (&mut *self.state, &mut *self.tracks)
    }

    pub fn state(&self) -> &SelectionState {
        &*self.state
    }

    pub fn tracks(&self) -> &TrackList {
        &*self.tracks
    }

    /// Keep the changes made so far. Later calls do nothing.
    pub fn commit(&mut self) {
        if self.initial.take().is_some() {
            tracing::trace!("Selection transaction committed");
        }
    }

    pub fn is_committed(&self) -> bool {
        self.initial.is_none()
    }
}

impl Drop for SelectionStateChanger<'_> {
    fn drop(&mut self) {
        if let Some(initial) = self.initial.take() {
            initial.restore(&mut *self.state, &mut *self.tracks);
            tracing::debug!("Selection transaction rolled back");
        }
    }
}
