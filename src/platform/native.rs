//! winit window events → [`InputEvent`].

use winit::{
    event::{ElementState, WindowEvent},
    keyboard::PhysicalKey,
};

use crate::input::{
    to_surface_local, InputEvent, MouseButton, SurfaceGeometry,
};

/// Map a winit mouse button to a tracked button. Middle, back, forward and
/// extra buttons are not tracked.
#[must_use]
pub fn mouse_button_from_winit(
    button: winit::event::MouseButton,
) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

/// Normalize a physical key transition.
///
/// Identified keys use the `KeyCode` debug name (`"KeyW"`, `"ShiftLeft"`),
/// which matches the DOM `KeyboardEvent.code` names the bindings use.
/// Unidentified keys keep their native debug form so they are reported as
/// unsupported instead of silently vanishing.
#[must_use]
pub fn key_event(physical_key: PhysicalKey, state: ElementState) -> InputEvent {
    let code = match physical_key {
        PhysicalKey::Code(code) => format!("{code:?}"),
        PhysicalKey::Unidentified(native) => format!("{native:?}"),
    };
    InputEvent::Key {
        code,
        down: state == ElementState::Pressed,
    }
}

/// Translate a window event into an input event, if it carries input.
///
/// winit reports cursor positions relative to the window's client area, so
/// most callers pass [`SurfaceOffset::ZERO`]; embedders that draw into a
/// sub-rectangle pass its origin instead.
///
/// [`SurfaceOffset::ZERO`]: crate::input::SurfaceOffset::ZERO
pub fn translate_window_event(
    event: &WindowEvent,
    geometry: &impl SurfaceGeometry,
) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            Some(key_event(event.physical_key, event.state))
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = mouse_button_from_winit(*button)?;
            Some(InputEvent::MouseButton {
                button,
                down: *state == ElementState::Pressed,
            })
        }
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_surface_local(
                geometry,
                position.x as f32,
                position.y as f32,
            );
            Some(InputEvent::CursorMoved { x, y })
        }
        _ => None,
    }
}
