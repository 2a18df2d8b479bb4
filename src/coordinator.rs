// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The controller keeping three views of the activity store consistent:
//! map markers, list rows, and the persisted snapshot.
//!
//! All UI concerns sit behind collaborator traits injected at construction,
//! so front-ends and test doubles plug in the same way. Every user intent is
//! handled to completion before the next one; a marker, a list row, and a
//! store entry are always added and removed together.

use uuid::Uuid;

use crate::db::{KeyValueStorage, PersistenceAdapter};
use crate::error::{AppError, Result};
use crate::factory::{self, RawFields};
use crate::models::{Activity, Coordinates, KindTag};
use crate::store::ActivityStore;

/// Map widget as the coordinator sees it.
pub trait MapWidget {
    /// Place a marker for an activity. `kind` selects the icon variant.
    fn place_marker(&mut self, id: Uuid, coords: Coordinates, kind: KindTag, label: &str);
    fn remove_marker(&mut self, id: Uuid);
    fn pan_to(&mut self, coords: Coordinates);
}

/// Activity entry form.
pub trait FormUi {
    /// Reveal the form and focus the first field of the given kind.
    fn show(&mut self, kind: KindTag);
    /// Hide the form. Implementations may re-show it after a cosmetic
    /// delay; that delay carries no data-consistency meaning and must not
    /// gate any other operation.
    fn hide(&mut self);
    /// Toggle which fields are visible for the given kind.
    fn set_visible_fields(&mut self, kind: KindTag);
}

/// Rendered activity list.
pub trait ListUi {
    fn append_row(&mut self, activity: &Activity);
    fn remove_row(&mut self, id: Uuid);
}

/// Yes/no gate before destructive actions.
pub trait ConfirmGate {
    fn confirm_delete(&mut self, activity: &Activity) -> bool;
}

/// Coordinator state: `Idle` (no pending location) or `Placing` (a map
/// click captured, form visible).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Placing,
}

/// Reacts to user intents, drives store mutations, and emits display
/// commands to the injected collaborators.
pub struct ViewCoordinator<M, F, L, C, S>
where
    M: MapWidget,
    F: FormUi,
    L: ListUi,
    C: ConfirmGate,
    S: KeyValueStorage,
{
    map: M,
    form: F,
    list: L,
    confirm: C,
    store: ActivityStore,
    persistence: PersistenceAdapter<S>,
    /// The location of the user's last map click, awaiting form completion.
    /// At most one; a new click overwrites it.
    pending: Option<Coordinates>,
    selected_kind: KindTag,
}

impl<M, F, L, C, S> ViewCoordinator<M, F, L, C, S>
where
    M: MapWidget,
    F: FormUi,
    L: ListUi,
    C: ConfirmGate,
    S: KeyValueStorage,
{
    /// Restore persisted activities and replay their render commands in
    /// creation order. Starts in `Idle` with the hiking kind preselected.
    pub fn start(
        map: M,
        form: F,
        list: L,
        confirm: C,
        persistence: PersistenceAdapter<S>,
    ) -> Result<Self> {
        let mut coordinator = Self {
            map,
            form,
            list,
            confirm,
            store: ActivityStore::new(),
            persistence,
            pending: None,
            selected_kind: KindTag::Hiking,
        };

        if let Some(records) = coordinator.persistence.load()? {
            tracing::info!(count = records.len(), "Restored persisted activities");
            coordinator.store = ActivityStore::from_records(records);
            for activity in coordinator.store.all() {
                coordinator.map.place_marker(
                    activity.id,
                    activity.coordinates,
                    activity.kind.tag(),
                    &activity.popup_label(),
                );
                coordinator.list.append_row(activity);
            }
        }

        Ok(coordinator)
    }

    /// A click on the map captures a pending location and opens the form.
    /// A second click overwrites the first; clicks never queue.
    pub fn map_clicked(&mut self, coords: Coordinates) {
        self.pending = Some(coords);
        self.form.show(self.selected_kind);
    }

    /// The user picked a different kind in the form's selector.
    pub fn kind_changed(&mut self, kind: KindTag) {
        self.selected_kind = kind;
        if self.pending.is_some() {
            self.form.set_visible_fields(kind);
        }
    }

    /// The user submitted the form.
    ///
    /// Validation failures leave the pending location and the form in place
    /// so the user can correct the input; the error is returned for the
    /// shell to surface. On success the activity is stored, rendered as a
    /// marker and a list row, and persisted.
    pub fn form_submitted(&mut self, raw: &RawFields) -> Result<()> {
        debug_assert!(
            self.pending.is_some(),
            "form submitted without a pending location"
        );
        let Some(pending) = self.pending else {
            return Err(AppError::Precondition(
                "form submitted without a pending location",
            ));
        };

        let activity = factory::build(self.selected_kind, pending, raw)?;

        tracing::info!(
            activity_id = %activity.id,
            kind = activity.kind.tag().label(),
            "Activity logged"
        );
        self.map.place_marker(
            activity.id,
            activity.coordinates,
            activity.kind.tag(),
            &activity.popup_label(),
        );
        self.list.append_row(&activity);
        self.store.add(activity);

        self.pending = None;
        self.form.hide();
        self.persistence.save(&self.store)?;
        Ok(())
    }

    /// Delete an activity after user confirmation.
    ///
    /// Returns whether anything was removed. Unknown ids and declined
    /// confirmations leave the store, the marker table, and the persisted
    /// snapshot untouched.
    pub fn delete_requested(&mut self, id: Uuid) -> Result<bool> {
        let Some(activity) = self.store.find_by_id(&id) else {
            tracing::debug!(activity_id = %id, "Delete requested for unknown activity");
            return Ok(false);
        };

        if !self.confirm.confirm_delete(activity) {
            return Ok(false);
        }

        self.store.remove(&id);
        self.map.remove_marker(id);
        self.list.remove_row(id);
        self.persistence.save(&self.store)?;

        tracing::info!(activity_id = %id, "Activity deleted");
        Ok(true)
    }

    /// Pan the map to an activity picked from the list. Unknown ids are
    /// ignored.
    pub fn row_selected(&mut self, id: Uuid) {
        match self.store.find_by_id(&id) {
            Some(activity) => self.map.pan_to(activity.coordinates),
            None => {
                tracing::debug!(activity_id = %id, "Selection of unknown activity ignored");
            }
        }
    }

    /// Drop every activity, marker, row, and the persisted snapshot.
    /// Equivalent to relaunching the app with empty storage.
    pub fn reset(&mut self) -> Result<()> {
        for activity in self.store.all() {
            self.map.remove_marker(activity.id);
            self.list.remove_row(activity.id);
        }
        self.store = ActivityStore::new();
        self.pending = None;
        self.persistence.clear()?;

        tracing::info!("Journal reset");
        Ok(())
    }

    pub fn state(&self) -> CoordinatorState {
        if self.pending.is_some() {
            CoordinatorState::Placing
        } else {
            CoordinatorState::Idle
        }
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn selected_kind(&self) -> KindTag {
        self.selected_kind
    }
}
