mod offer_vm;
mod quiz_vm;

pub use offer_vm::format_countdown;
pub use quiz_vm::{
    bmi_category_label, clamped_number_input, parse_number_input, progress_percent, severity_class,
};
