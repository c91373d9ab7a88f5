//! Browser DOM events → [`InputState`].
//!
//! Keyboard and mouse listeners are registered on the document, as key
//! events only reach a canvas that has focus. Pointer positions are mapped
//! through the canvas bounding rect on every move, so the state always holds
//! canvas-local coordinates even when the page scrolls or reflows.
//!
//! Browsers send no `keyup`/`mouseup` for inputs held while the page loses
//! focus, so a `blur` on the window releases everything.
//!
//! The browser is single-threaded, so the state is shared with the frame
//! loop through `Rc<RefCell<_>>`. The frame loop must not hold the borrow
//! across an `await` or a yield to the browser.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent,
};

use crate::error::InputError;
use crate::input::{
    mouse_button_from_dom, to_surface_local, CodeTranslator, InputState,
    SurfaceGeometry,
};

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;
type MouseListener = Closure<dyn FnMut(MouseEvent)>;
type FocusListener = Closure<dyn FnMut()>;

/// Canvas bounding rect as the pointer origin.
struct CanvasGeometry(HtmlCanvasElement);

impl SurfaceGeometry for CanvasGeometry {
    fn origin(&self) -> (f32, f32) {
        let rect = self.0.get_bounding_client_rect();
        (rect.left() as f32, rect.top() as f32)
    }
}

/// Install the console logger and panic hook for wasm builds.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

/// Live DOM listeners feeding an [`InputState`]. Dropping it unregisters
/// every listener.
pub struct WebInput {
    target: EventTarget,
    key_listeners: Vec<(&'static str, KeyListener)>,
    mouse_listeners: Vec<(&'static str, MouseListener)>,
    /// The document's window and its `blur` listener, when there is one.
    blur: Option<(EventTarget, FocusListener)>,
}

impl WebInput {
    /// Register listeners on `document`, mapping pointer positions into
    /// `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Platform`] if a listener cannot be registered.
    pub fn attach<T>(
        document: &Document,
        canvas: HtmlCanvasElement,
        state: &Rc<RefCell<InputState<T>>>,
    ) -> Result<Self, InputError>
    where
        T: CodeTranslator + 'static,
    {
        let mut web_input = Self {
            target: document.clone().unchecked_into::<EventTarget>(),
            key_listeners: Vec::new(),
            mouse_listeners: Vec::new(),
            blur: None,
        };

        for (event_type, down) in [("keydown", true), ("keyup", false)] {
            let state = Rc::clone(state);
            let listener = KeyListener::new(move |event: KeyboardEvent| {
                with_state(&state, |input| {
                    let _ = input.on_key_transition(&event.code(), down);
                });
            });
            web_input.listen_key(event_type, listener)?;
        }

        for (event_type, down) in [("mousedown", true), ("mouseup", false)] {
            let state = Rc::clone(state);
            let listener = MouseListener::new(move |event: MouseEvent| {
                let Some(button) = mouse_button_from_dom(event.button()) else {
                    return;
                };
                with_state(&state, |input| {
                    let _ = input.on_mouse_button(button, down);
                });
            });
            web_input.listen_mouse(event_type, listener)?;
        }

        let geometry = CanvasGeometry(canvas);
        let move_state = Rc::clone(state);
        let listener = MouseListener::new(move |event: MouseEvent| {
            let (x, y) = to_surface_local(
                &geometry,
                event.client_x() as f32,
                event.client_y() as f32,
            );
            with_state(&move_state, |input| input.on_pointer_move(x, y));
        });
        web_input.listen_mouse("mousemove", listener)?;

        match document.default_view() {
            Some(window) => {
                let blur_state = Rc::clone(state);
                let listener = FocusListener::new(move || {
                    with_state(&blur_state, InputState::<T>::release_all);
                });
                web_input.listen_blur(window.unchecked_into(), listener)?;
            }
            None => log::warn!("document has no window, focus loss untracked"),
        }

        log::info!("attached web input listeners");
        Ok(web_input)
    }

    /// Look up a canvas by element id and attach to the page's document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Platform`] if there is no document, no element
    /// with that id, or the element is not a canvas.
    pub fn attach_to_canvas<T>(
        canvas_id: &str,
        state: &Rc<RefCell<InputState<T>>>,
    ) -> Result<Self, InputError>
    where
        T: CodeTranslator + 'static,
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| InputError::Platform("no document".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| {
                InputError::Platform(format!("no element #{canvas_id}"))
            })?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| {
                InputError::Platform(format!("#{canvas_id} is not a canvas"))
            })?;
        Self::attach(&document, canvas, state)
    }

    fn listen_key(
        &mut self,
        event_type: &'static str,
        listener: KeyListener,
    ) -> Result<(), InputError> {
        self.target
            .add_event_listener_with_callback(
                event_type,
                listener.as_ref().unchecked_ref(),
            )
            .map_err(|e| {
                InputError::Platform(format!("{event_type} listener: {e:?}"))
            })?;
        self.key_listeners.push((event_type, listener));
        Ok(())
    }

    fn listen_mouse(
        &mut self,
        event_type: &'static str,
        listener: MouseListener,
    ) -> Result<(), InputError> {
        self.target
            .add_event_listener_with_callback(
                event_type,
                listener.as_ref().unchecked_ref(),
            )
            .map_err(|e| {
                InputError::Platform(format!("{event_type} listener: {e:?}"))
            })?;
        self.mouse_listeners.push((event_type, listener));
        Ok(())
    }

    fn listen_blur(
        &mut self,
        window: EventTarget,
        listener: FocusListener,
    ) -> Result<(), InputError> {
        window
            .add_event_listener_with_callback(
                "blur",
                listener.as_ref().unchecked_ref(),
            )
            .map_err(|e| {
                InputError::Platform(format!("blur listener: {e:?}"))
            })?;
        self.blur = Some((window, listener));
        Ok(())
    }
}

impl Drop for WebInput {
    fn drop(&mut self) {
        for (event_type, listener) in &self.key_listeners {
            let _ = self.target.remove_event_listener_with_callback(
                event_type,
                listener.as_ref().unchecked_ref(),
            );
        }
        for (event_type, listener) in &self.mouse_listeners {
            let _ = self.target.remove_event_listener_with_callback(
                event_type,
                listener.as_ref().unchecked_ref(),
            );
        }
        if let Some((window, listener)) = &self.blur {
            let _ = window.remove_event_listener_with_callback(
                "blur",
                listener.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Run `f` against the shared state, skipping the event if the frame loop
/// currently holds the borrow.
fn with_state<T>(
    state: &RefCell<InputState<T>>,
    f: impl FnOnce(&mut InputState<T>),
) {
    match state.try_borrow_mut() {
        Ok(mut input) => f(&mut input),
        Err(_) => log::warn!("input state busy, dropping DOM event"),
    }
}
