//! Opens a window and logs held inputs, modifiers and pressed edges as
//! they change. Pass a TOML options file to try other key bindings.

use std::path::Path;

use frame_input::{
    InputState, LogicalInput, ModifierMask, MouseButton, Options, Viewer,
};

/// What the log line describes; only changes are printed.
#[derive(PartialEq, Eq)]
struct Snapshot {
    held: Vec<LogicalInput>,
    buttons: Vec<MouseButton>,
    modifiers: ModifierMask,
}

impl Snapshot {
    fn of(input: &InputState) -> Self {
        Self {
            held: input.held_keys().collect(),
            buttons: MouseButton::ALL
                .into_iter()
                .filter(|b| input.mouse_query(*b).held)
                .collect(),
            modifiers: input.modifiers(),
        }
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut last = None;
    let result = Viewer::builder()
        .with_options(options)
        .build()
        .run(move |input, _dt| {
            let pressed: Vec<_> = LogicalInput::ALL
                .into_iter()
                .filter(|i| input.query(*i).pressed_edge)
                .collect();
            let clicked: Vec<_> = MouseButton::ALL
                .into_iter()
                .filter(|b| input.mouse_query(*b).pressed_edge)
                .collect();
            if !pressed.is_empty() || !clicked.is_empty() {
                log::info!(
                    "pressed {pressed:?} {clicked:?} at {:?}",
                    input.pointer_position()
                );
            }

            let snapshot = Snapshot::of(input);
            if last.as_ref() != Some(&snapshot) {
                log::info!(
                    "held {:?} buttons {:?} modifiers {:?}",
                    snapshot.held,
                    snapshot.buttons,
                    snapshot.modifiers
                );
                last = Some(snapshot);
            }
        });

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
