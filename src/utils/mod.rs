pub mod drag;
pub mod naming;

pub use drag::{apply_move, Bounds, DragDirection, DragState};
pub use naming::field_name;
