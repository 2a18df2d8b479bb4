// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line-oriented console front-end.
//!
//! Implements the coordinator's collaborator traits by printing display
//! commands, and drives the coordinator from an interactive prompt. This is
//! deliberately thin: everything with invariants lives behind the
//! coordinator.

use std::io::{self, BufRead, Write};

use uuid::Uuid;

use crate::config::Config;
use crate::coordinator::{
    ConfirmGate, CoordinatorState, FormUi, ListUi, MapWidget, ViewCoordinator,
};
use crate::db::{FileStorage, KeyValueStorage, PersistenceAdapter};
use crate::error::AppError;
use crate::factory::RawFields;
use crate::models::{Activity, ActivityKind, Coordinates, KindTag};

/// Console rendering of the map widget.
pub struct ConsoleMap {
    zoom: u8,
}

impl ConsoleMap {
    pub fn new(zoom: u8, center: Coordinates) -> Self {
        println!("map: centered at ({:.4}, {:.4}), zoom {}", center.lat, center.lng, zoom);
        Self { zoom }
    }
}

impl MapWidget for ConsoleMap {
    fn place_marker(&mut self, id: Uuid, coords: Coordinates, kind: KindTag, label: &str) {
        println!(
            "map: {} marker {} at ({:.4}, {:.4}) — {}",
            kind.label().to_lowercase(),
            id,
            coords.lat,
            coords.lng,
            label
        );
    }

    fn remove_marker(&mut self, id: Uuid) {
        println!("map: removed marker {id}");
    }

    fn pan_to(&mut self, coords: Coordinates) {
        println!(
            "map: panned to ({:.4}, {:.4}), zoom {}",
            coords.lat, coords.lng, self.zoom
        );
    }
}

/// Console rendering of the entry form.
#[derive(Default)]
pub struct ConsoleForm;

impl FormUi for ConsoleForm {
    fn show(&mut self, kind: KindTag) {
        println!("form: open for {} — {}", kind.label().to_lowercase(), field_hint(kind));
    }

    fn hide(&mut self) {
        println!("form: closed");
    }

    fn set_visible_fields(&mut self, kind: KindTag) {
        println!("form: now asking for {}", field_hint(kind));
    }
}

fn field_hint(kind: KindTag) -> &'static str {
    match kind {
        KindTag::Hiking => "trail name, distance (km), duration (min)",
        KindTag::Highlight => "description",
    }
}

/// Console rendering of the activity list.
#[derive(Default)]
pub struct ConsoleList;

impl ListUi for ConsoleList {
    fn append_row(&mut self, activity: &Activity) {
        match &activity.kind {
            ActivityKind::Hiking {
                distance_km,
                duration_min,
                speed_kmh,
                ..
            } => println!(
                "list: + {} — {} | 📆 {} | 🥾 {} km | ⏱ {} min | {:.1} km/h",
                activity.id,
                activity.display_name(),
                activity.date_label,
                distance_km,
                duration_min,
                speed_kmh
            ),
            ActivityKind::Highlight { .. } => println!(
                "list: + {} — {} | 📆 {}",
                activity.id,
                activity.display_name(),
                activity.date_label
            ),
        }
    }

    fn remove_row(&mut self, id: Uuid) {
        println!("list: - {id}");
    }
}

/// Confirmation gate reading a y/n answer from stdin.
#[derive(Default)]
pub struct ConsoleConfirm;

impl ConfirmGate for ConsoleConfirm {
    fn confirm_delete(&mut self, activity: &Activity) -> bool {
        print!("Delete \"{}\"? [y/N] ", activity.display_name());
        io::stdout().flush().ok();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }
}

const HELP: &str = "\
commands:
  click <lat> <lng>   click the map, opening the entry form
  kind <hiking|highlight>
                      switch the form's activity kind
  submit              fill in the form and log the activity
  list                show all logged activities
  goto <id>           pan the map to an activity
  delete <id>         delete an activity (asks for confirmation)
  reset               erase the journal and start fresh
  help                show this help
  quit                exit";

/// Run the interactive shell until EOF or `quit`.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let storage = FileStorage::open(&config.storage_dir)?;
    let persistence = PersistenceAdapter::new(storage);
    let map = ConsoleMap::new(config.map_zoom, config.fallback_coords);

    let mut coordinator = ViewCoordinator::start(
        map,
        ConsoleForm,
        ConsoleList,
        ConsoleConfirm,
        persistence,
    )?;

    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "click" => match parse_click(&args) {
                Some(coords) => coordinator.map_clicked(coords),
                None => println!("usage: click <lat> <lng>"),
            },
            "kind" => match args.first().copied() {
                Some("hiking") => coordinator.kind_changed(KindTag::Hiking),
                Some("highlight") => coordinator.kind_changed(KindTag::Highlight),
                _ => println!("usage: kind <hiking|highlight>"),
            },
            "submit" => submit(&mut coordinator, &stdin)?,
            "list" => {
                for activity in coordinator.store().all() {
                    println!(
                        "{}  {}  {} ({})",
                        activity.id,
                        activity.kind.tag().label(),
                        activity.display_name(),
                        activity.date_label
                    );
                }
                println!("{} activities", coordinator.store().len());
            }
            "goto" => match parse_id(&args) {
                Some(id) => coordinator.row_selected(id),
                None => println!("usage: goto <id>"),
            },
            "delete" => match parse_id(&args) {
                Some(id) => {
                    if !coordinator.delete_requested(id)? {
                        println!("nothing deleted");
                    }
                }
                None => println!("usage: delete <id>"),
            },
            "reset" => coordinator.reset()?,
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try \"help\")"),
        }
    }

    Ok(())
}

/// Prompt for the visible fields of the selected kind, then submit.
fn submit<M, F, L, C, S>(
    coordinator: &mut ViewCoordinator<M, F, L, C, S>,
    stdin: &io::Stdin,
) -> anyhow::Result<()>
where
    M: MapWidget,
    F: FormUi,
    L: ListUi,
    C: ConfirmGate,
    S: KeyValueStorage,
{
    if coordinator.state() != CoordinatorState::Placing {
        println!("click the map first");
        return Ok(());
    }

    let mut raw = RawFields::default();
    match coordinator.selected_kind() {
        KindTag::Hiking => {
            raw.trail_name = prompt(stdin, "trail name")?;
            raw.distance_km = prompt(stdin, "distance (km)")?;
            raw.duration_min = prompt(stdin, "duration (min)")?;
        }
        KindTag::Highlight => {
            raw.description = prompt(stdin, "description")?;
        }
    }

    match coordinator.form_submitted(&raw) {
        Ok(()) => {}
        // User-correctable: surface the message, pending location stays.
        Err(AppError::Validation(e)) => println!("⚠️  {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn prompt(stdin: &io::Stdin, label: &str) -> anyhow::Result<String> {
    print!("  {label}: ");
    io::stdout().flush()?;
    let mut value = String::new();
    stdin.lock().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}

fn parse_click(args: &[&str]) -> Option<Coordinates> {
    match args {
        [lat, lng] => Some(Coordinates {
            lat: lat.parse().ok()?,
            lng: lng.parse().ok()?,
        }),
        _ => None,
    }
}

fn parse_id(args: &[&str]) -> Option<Uuid> {
    args.first().and_then(|raw| Uuid::parse_str(raw).ok())
}
