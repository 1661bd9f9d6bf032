pub mod draggable_number_input;

pub use draggable_number_input::DraggableNumberInput;
