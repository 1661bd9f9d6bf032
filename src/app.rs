use leptos::*;

use crate::components::DraggableNumberInput;
use crate::utils::DragDirection;

/// Demo host page. Each control is backed by a signal the page owns; emitted
/// changes are written back into it, the standard controlled-input cycle.
#[component]
pub fn App() -> impl IntoView {
    let speed = create_rw_signal(0.0f64);
    let offset = create_rw_signal(0.0f64);
    let volume = create_rw_signal(50.0f64);

    view! {
        <main class="container">
            <h1>"Draggable number inputs"</h1>
            <p>"Drag a label to change its value, or type into the field."</p>

            <DraggableNumberInput
                value=speed
                on_input=move |v| speed.set(v)
                label="Speed"
            />
            <DraggableNumberInput
                value=offset
                on_input=move |v| offset.set(v)
                label="Horizontal offset"
                drag_direction=DragDirection::X
            />
            <DraggableNumberInput
                value=volume
                on_input=move |v| volume.set(v)
                label="Volume"
                min=Some(0.0)
                max=Some(100.0)
            />

            <p class="form-hint">
                {move || {
                    format!(
                        "speed: {}, offset: {}, volume: {}",
                        speed.get(),
                        offset.get(),
                        volume.get()
                    )
                }}
            </p>
        </main>
    }
}
