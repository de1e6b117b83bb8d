//! Browser entry point: finds the host page elements and wires their events
//! to a shared [`Engine`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, MouseEvent, TouchEvent, Window,
};

use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::engine::{Engine, EngineCore};
use crate::error::SketchError;
use crate::geometry::{Layout, Point};
use crate::input::{PointerInput, TouchInput};
use crate::tool::{ToolSelector, usable_swatches, usable_widths};

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| SketchError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SketchError::MissingElement("document".into()))?;

    let config = load_config(&document)?;
    console_log::init_with_level(config.log_level()?).map_err(|e| SketchError::Js(e.to_string()))?;

    let canvas: HtmlCanvasElement = element_by_id(&document, &config.canvas_id)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| SketchError::MissingElement("2d context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SketchError::MissingElement("2d context".into()))?;
    let custom_color: HtmlInputElement = element_by_id(&document, &config.custom_color_id)?;
    let clear_button: HtmlElement = element_by_id(&document, &config.clear_button_id)?;
    let (color_options, palette) = usable_swatches(with_data(
        elements_by_selector(&document, &config.color_option_selector)?,
        "color",
    ));
    let (size_options, widths) = usable_widths(with_data(
        elements_by_selector(&document, &config.size_option_selector)?,
        "size",
    ));

    let tools = ToolSelector::new(palette, widths, config.initial_tool()?)?;
    let core = EngineCore::new(tools, config.background_color()?);
    let engine = Rc::new(RefCell::new(Engine::new(ctx, core)));

    {
        let mut engine = engine.borrow_mut();
        engine.set_layout(measure(&window, &canvas)?);
        let tools = engine.tools();
        sync_highlights(&color_options, &config.active_class, |i| tools.is_color_active(i));
        sync_highlights(&size_options, &config.active_class, |i| tools.is_width_active(i));
    }
    log::info!(
        "sketchpad ready: {}x{} surface, {} colors, {} sizes",
        canvas.width(),
        canvas.height(),
        color_options.len(),
        size_options.len()
    );

    // Layout: load and resize.
    for event in ["load", "resize"] {
        let engine = engine.clone();
        let window_cb = window.clone();
        let canvas = canvas.clone();
        let on_layout = Closure::<dyn FnMut(Event)>::new(move |_| {
            refresh_layout(&engine, &window_cb, &canvas);
        });
        window.add_event_listener_with_callback(event, on_layout.as_ref().unchecked_ref())?;
        on_layout.forget();
    }

    // Palette swatches.
    for (index, option) in color_options.iter().enumerate() {
        let engine = engine.clone();
        let options = color_options.clone();
        let active_class = config.active_class.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut engine = engine.borrow_mut();
            match engine.select_palette_color(index) {
                Ok(()) => {
                    let tools = engine.tools();
                    sync_highlights(&options, &active_class, |i| tools.is_color_active(i));
                }
                Err(err) => log::warn!("palette selection rejected: {err}"),
            }
        });
        option.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Free-form color picker.
    {
        let engine = engine.clone();
        let options = color_options.clone();
        let active_class = config.active_class.clone();
        let input = custom_color.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut engine = engine.borrow_mut();
            match engine.select_custom_color(&input.value()) {
                Ok(()) => {
                    let tools = engine.tools();
                    sync_highlights(&options, &active_class, |i| tools.is_color_active(i));
                }
                Err(err) => log::warn!("custom color rejected: {err}"),
            }
        });
        custom_color.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    // Brush widths.
    for (index, option) in size_options.iter().enumerate() {
        let engine = engine.clone();
        let options = size_options.clone();
        let active_class = config.active_class.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut engine = engine.borrow_mut();
            match engine.select_width(index) {
                Ok(()) => {
                    let tools = engine.tools();
                    sync_highlights(&options, &active_class, |i| tools.is_width_active(i));
                }
                Err(err) => log::warn!("width selection rejected: {err}"),
            }
        });
        option.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Clear.
    {
        let engine = engine.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            engine.borrow_mut().clear();
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Mouse.
    {
        let engine = engine.clone();
        let window_cb = window.clone();
        let canvas_cb = canvas.clone();
        let ondown = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            refresh_layout(&engine, &window_cb, &canvas_cb);
            engine
                .borrow_mut()
                .on_pointer(PointerInput::Down(mouse_point(&event)));
        });
        canvas.add_event_listener_with_callback("mousedown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }
    {
        let engine = engine.clone();
        let onmove = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            engine
                .borrow_mut()
                .on_pointer(PointerInput::Move(mouse_point(&event)));
        });
        canvas.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }
    for (event, input) in [("mouseup", PointerInput::Up), ("mouseleave", PointerInput::Leave)] {
        let engine = engine.clone();
        let onstop = Closure::<dyn FnMut(MouseEvent)>::new(move |_| {
            engine.borrow_mut().on_pointer(input);
        });
        canvas.add_event_listener_with_callback(event, onstop.as_ref().unchecked_ref())?;
        onstop.forget();
    }

    // Touch: non-passive so the page does not scroll or zoom under the finger.
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    for event in ["touchstart", "touchmove", "touchend", "touchcancel"] {
        let engine = engine.clone();
        let window_cb = window.clone();
        let canvas_cb = canvas.clone();
        let ontouch = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            ev.prevent_default();
            let first = first_touch_point(&ev);
            let input = match event {
                "touchstart" => {
                    refresh_layout(&engine, &window_cb, &canvas_cb);
                    TouchInput::Start(first)
                }
                "touchmove" => TouchInput::Move(first),
                "touchend" => TouchInput::End,
                _ => TouchInput::Cancel,
            };
            engine.borrow_mut().on_touch(input);
        });
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            ontouch.as_ref().unchecked_ref(),
            &options,
        )?;
        ontouch.forget();
    }

    Ok(())
}

/// Read the optional JSON config element, falling back to defaults.
fn load_config(document: &Document) -> Result<Config, SketchError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => Config::from_json(&raw),
        _ => Ok(Config::default()),
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SketchError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SketchError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| SketchError::MissingElement(format!("#{id} has the wrong element type")))
}

fn elements_by_selector(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, SketchError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            let el = node
                .dyn_into::<HtmlElement>()
                .map_err(|_| SketchError::MissingElement(format!("{selector} match {i} is not an HTML element")))?;
            out.push(el);
        }
    }
    Ok(out)
}

/// Pair each option with its `data-<key>` attribute value.
fn with_data(options: Vec<HtmlElement>, key: &str) -> Vec<(HtmlElement, Option<String>)> {
    options
        .into_iter()
        .map(|el| {
            let raw = el.dataset().get(key);
            (el, raw)
        })
        .collect()
}

/// Page-space origin of the canvas plus its rendered and intrinsic sizes.
fn measure(window: &Window, canvas: &HtmlCanvasElement) -> Result<Layout, SketchError> {
    let rect = canvas.get_bounding_client_rect();
    Ok(Layout {
        origin: Point::new(rect.x() + window.scroll_x()?, rect.y() + window.scroll_y()?),
        rendered_width: rect.width(),
        rendered_height: rect.height(),
        intrinsic_width: f64::from(canvas.width()),
        intrinsic_height: f64::from(canvas.height()),
    })
}

fn refresh_layout(engine: &Rc<RefCell<Engine>>, window: &Window, canvas: &HtmlCanvasElement) {
    match measure(window, canvas) {
        Ok(layout) => engine.borrow_mut().set_layout(layout),
        Err(err) => log::warn!("layout measurement failed: {err}"),
    }
}

fn sync_highlights(options: &[HtmlElement], class: &str, is_active: impl Fn(usize) -> bool) {
    for (i, el) in options.iter().enumerate() {
        if let Err(err) = el.class_list().toggle_with_force(class, is_active(i)) {
            log::warn!("could not toggle {class:?} on option {i}: {err:?}");
        }
    }
}

fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.page_x()), f64::from(event.page_y()))
}

fn first_touch_point(event: &TouchEvent) -> Option<Point> {
    event
        .touches()
        .get(0)
        .map(|t| Point::new(f64::from(t.page_x()), f64::from(t.page_y())))
}
