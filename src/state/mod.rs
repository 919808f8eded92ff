pub mod answer;
pub mod drag;
pub mod scale;

pub use answer::{judge, parse_answer, AnswerError, Verdict};
pub use drag::{clamp_to_container, DragState};
pub use scale::{is_over, plate_anchor, ScaleState};
