use leptos::*;
use wasm_bindgen::JsCast;

use crate::utils::drag::{apply_move, Bounds, DragDirection, DragState};
use crate::utils::naming::field_name;

/// Numeric input whose value can also be edited by dragging the pointer
/// across its label.
///
/// Controlled component: the host owns the value and passes it in; every
/// accepted change (typed or dragged) is emitted through `on_input` and is
/// expected to be written back into `value` by the host. The input's `name`
/// is derived from `label`, so tests and form tooling can address it without
/// relying on DOM order.
#[component]
pub fn DraggableNumberInput(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(into)] on_input: Callback<f64>,
    #[prop(into)] label: String,
    #[prop(optional_no_strip)] min: Option<f64>,
    #[prop(optional_no_strip)] max: Option<f64>,
    #[prop(optional)] drag_direction: DragDirection,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let name = field_name(&label);
    let input_id = id.unwrap_or_else(|| name.clone());
    let bounds = Bounds::new(min, max);

    let full_class = if let Some(extra) = class {
        format!("form-input {}", extra)
    } else {
        "form-input".to_string()
    };

    let drag_state = create_rw_signal(DragState::Idle);

    // Window-level listeners exist only for the lifetime of a drag gesture:
    // attached when the state machine enters Dragging, removed on exit, so
    // movement off the label keeps registering while a drag is active.
    create_effect(move |_| {
        if drag_state.get().is_dragging() {
            let on_move = wasm_bindgen::closure::Closure::wrap(Box::new(
                move |event: web_sys::MouseEvent| {
                    let current = value.get_untracked();
                    let proposed = apply_move(
                        current,
                        drag_direction,
                        event.movement_x(),
                        event.movement_y(),
                        bounds,
                    );
                    if proposed != current {
                        on_input.call(proposed);
                    }
                },
            )
                as Box<dyn FnMut(_)>);

            // Ends the gesture on mouseup anywhere, or when the window loses
            // focus mid-drag.
            let end_drag = wasm_bindgen::closure::Closure::wrap(Box::new(
                move |_event: web_sys::Event| {
                    drag_state.set(DragState::Idle);
                },
            )
                as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "mousemove",
                    on_move.as_ref().unchecked_ref(),
                );
                let _ = window.add_event_listener_with_callback(
                    "mouseup",
                    end_drag.as_ref().unchecked_ref(),
                );
                let _ = window.add_event_listener_with_callback(
                    "blur",
                    end_drag.as_ref().unchecked_ref(),
                );

                on_cleanup(move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "mouseup",
                            end_drag.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "blur",
                            end_drag.as_ref().unchecked_ref(),
                        );
                    }
                    drop(on_move);
                    drop(end_drag);
                });
            }
        }
    });

    view! {
        <div class="form-group">
            <label
                class="form-label"
                for=input_id.clone()
                on:mousedown=move |ev| {
                    ev.prevent_default();
                    drag_state.set(DragState::begin(value.get_untracked()));
                }
            >
                {label}
            </label>
            <input
                type="number"
                class=full_class
                id=input_id
                name=name
                min=min
                max=max
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                        on_input.call(bounds.clamp(parsed));
                    }
                }
            />
        </div>
    }
}
