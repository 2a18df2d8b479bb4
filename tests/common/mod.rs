// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test doubles for the coordinator's collaborators.
//!
//! Each double records the display commands it receives; clones share state
//! so a test can keep a handle while the coordinator owns another.

use std::cell::RefCell;
use std::rc::Rc;

use trail_journal::coordinator::{
    ConfirmGate, FormUi, ListUi, MapWidget, ViewCoordinator,
};
use trail_journal::db::{MemoryStorage, PersistenceAdapter};
use trail_journal::factory::RawFields;
use trail_journal::models::{Activity, Coordinates, KindTag};

pub type TestCoordinator =
    ViewCoordinator<RecordingMap, RecordingForm, RecordingList, ScriptedConfirm, MemoryStorage>;

/// A marker as the map widget saw it placed.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct PlacedMarker {
    pub id: uuid::Uuid,
    pub coords: Coordinates,
    pub kind: KindTag,
    pub label: String,
}

/// Map double recording placed/removed markers and pans.
#[derive(Debug, Default, Clone)]
pub struct RecordingMap {
    inner: Rc<RefCell<MapState>>,
}

#[derive(Debug, Default)]
struct MapState {
    markers: Vec<PlacedMarker>,
    pans: Vec<Coordinates>,
}

#[allow(dead_code)]
impl RecordingMap {
    pub fn marker_ids(&self) -> Vec<uuid::Uuid> {
        self.inner.borrow().markers.iter().map(|m| m.id).collect()
    }

    pub fn markers(&self) -> Vec<PlacedMarker> {
        self.inner.borrow().markers.clone()
    }

    pub fn pans(&self) -> Vec<Coordinates> {
        self.inner.borrow().pans.clone()
    }
}

impl MapWidget for RecordingMap {
    fn place_marker(&mut self, id: uuid::Uuid, coords: Coordinates, kind: KindTag, label: &str) {
        self.inner.borrow_mut().markers.push(PlacedMarker {
            id,
            coords,
            kind,
            label: label.to_string(),
        });
    }

    fn remove_marker(&mut self, id: uuid::Uuid) {
        self.inner.borrow_mut().markers.retain(|m| m.id != id);
    }

    fn pan_to(&mut self, coords: Coordinates) {
        self.inner.borrow_mut().pans.push(coords);
    }
}

/// Form double recording visibility and the kind it was shown for.
#[derive(Debug, Default, Clone)]
pub struct RecordingForm {
    inner: Rc<RefCell<FormState>>,
}

#[derive(Debug, Default)]
struct FormState {
    visible: bool,
    shown_for: Option<KindTag>,
    visible_fields: Option<KindTag>,
}

#[allow(dead_code)]
impl RecordingForm {
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    pub fn shown_for(&self) -> Option<KindTag> {
        self.inner.borrow().shown_for
    }

    pub fn visible_fields(&self) -> Option<KindTag> {
        self.inner.borrow().visible_fields
    }
}

impl FormUi for RecordingForm {
    fn show(&mut self, kind: KindTag) {
        let mut state = self.inner.borrow_mut();
        state.visible = true;
        state.shown_for = Some(kind);
        state.visible_fields = Some(kind);
    }

    fn hide(&mut self) {
        self.inner.borrow_mut().visible = false;
    }

    fn set_visible_fields(&mut self, kind: KindTag) {
        self.inner.borrow_mut().visible_fields = Some(kind);
    }
}

/// List double recording appended row ids in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingList {
    rows: Rc<RefCell<Vec<uuid::Uuid>>>,
}

#[allow(dead_code)]
impl RecordingList {
    pub fn row_ids(&self) -> Vec<uuid::Uuid> {
        self.rows.borrow().clone()
    }
}

impl ListUi for RecordingList {
    fn append_row(&mut self, activity: &Activity) {
        self.rows.borrow_mut().push(activity.id);
    }

    fn remove_row(&mut self, id: uuid::Uuid) {
        self.rows.borrow_mut().retain(|&row| row != id);
    }
}

/// Confirmation gate answering from a script, recording how often it was
/// asked.
#[derive(Debug, Clone)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: Rc<RefCell<usize>>,
}

#[allow(dead_code)]
impl ScriptedConfirm {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            asked: Rc::default(),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            asked: Rc::default(),
        }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.borrow()
    }
}

impl ConfirmGate for ScriptedConfirm {
    fn confirm_delete(&mut self, _activity: &Activity) -> bool {
        *self.asked.borrow_mut() += 1;
        self.answer
    }
}

/// Everything a coordinator test needs to observe.
#[allow(dead_code)]
pub struct Harness {
    pub map: RecordingMap,
    pub form: RecordingForm,
    pub list: RecordingList,
    pub confirm: ScriptedConfirm,
    pub storage: MemoryStorage,
}

/// Build a coordinator over fresh doubles and empty in-memory storage.
#[allow(dead_code)]
pub fn start_coordinator() -> (TestCoordinator, Harness) {
    start_coordinator_with(MemoryStorage::new(), ScriptedConfirm::accepting())
}

/// Build a coordinator over existing storage (for restart scenarios) and a
/// scripted confirmation gate.
#[allow(dead_code)]
pub fn start_coordinator_with(
    storage: MemoryStorage,
    confirm: ScriptedConfirm,
) -> (TestCoordinator, Harness) {
    let map = RecordingMap::default();
    let form = RecordingForm::default();
    let list = RecordingList::default();

    let coordinator = ViewCoordinator::start(
        map.clone(),
        form.clone(),
        list.clone(),
        confirm.clone(),
        PersistenceAdapter::new(storage.clone()),
    )
    .expect("coordinator starts");

    (
        coordinator,
        Harness {
            map,
            form,
            list,
            confirm,
            storage,
        },
    )
}

#[allow(dead_code)]
pub fn coords() -> Coordinates {
    Coordinates { lat: 52.1, lng: 4.8 }
}

#[allow(dead_code)]
pub fn raw_hiking(trail: &str, distance: &str, duration: &str) -> RawFields {
    RawFields {
        trail_name: trail.to_string(),
        distance_km: distance.to_string(),
        duration_min: duration.to_string(),
        ..RawFields::default()
    }
}

#[allow(dead_code)]
pub fn raw_highlight(description: &str) -> RawFields {
    RawFields {
        description: description.to_string(),
        ..RawFields::default()
    }
}
