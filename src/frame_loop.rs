// requestAnimationFrame driver. The callback re-registers itself after every
// frame while the loop is running; `stop` cancels the pending frame.

use crate::error::SurfaceError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameLoop {
    window: Window,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<FrameLoop, SurfaceError>
    where
        F: FnMut() + 'static,
    {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let frame_window = window.clone();
        let frame_running = Rc::clone(&running);
        let frame_pending = Rc::clone(&pending);
        let frame_callback = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_pending.set(None);
            if !frame_running.get() {
                return;
            }
            on_frame();
            // on_frame may have stopped us
            if !frame_running.get() {
                return;
            }
            match request_frame(&frame_window, &frame_callback) {
                Ok(handle) => frame_pending.set(Some(handle)),
                Err(err) => {
                    warn!("frame loop stopped: {}", err);
                    frame_running.set(false);
                }
            }
        }) as Box<dyn FnMut()>));

        match request_frame(window, &callback) {
            Ok(handle) => pending.set(Some(handle)),
            Err(err) => {
                // break the closure <-> cell cycle before bailing out
                callback.borrow_mut().take();
                return Err(err);
            }
        }

        Ok(FrameLoop {
            window: window.clone(),
            running,
            pending,
            callback,
        })
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.callback.borrow_mut().take();
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, SurfaceError> {
    match callback.borrow().as_ref() {
        Some(closure) => Ok(window.request_animation_frame(closure.as_ref().unchecked_ref())?),
        None => Err(SurfaceError::Js(String::from("frame callback was released"))),
    }
}
