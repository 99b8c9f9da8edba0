use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::palette::Palette;
use super::render::{self, CanvasSurface};
use super::state::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GlobeConfig, GlobeState};

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()
		.map_err(JsValue::from)
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

#[component]
pub fn GlobeCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GlobeState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window; globe not started");
			return;
		};

		let fixed = (
			width.unwrap_or(DEFAULT_WIDTH),
			height.unwrap_or(DEFAULT_HEIGHT),
		);
		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or(fixed)
		} else {
			fixed
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("Canvas context unavailable: {err:?}");
				return;
			}
		};
		let seed = random_seed();
		*state.borrow_mut() = Some(GlobeState::new(GlobeConfig::default(), w, h, seed));
		info!("Globe started on a {w}x{h} canvas");

		if fullscreen {
			let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state.clone(), animate.clone());
		let mut palette = Palette::new(seed.rotate_left(32));
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				let mut surface = CanvasSurface::new(&ctx, s.camera());
				render::render(s, &mut palette, &mut surface);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				error!("requestAnimationFrame failed: {err:?}");
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="globe-canvas"
			style="display: block; background: black;"
		/>
	}
}
