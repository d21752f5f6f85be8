//! Go source templates for the three generated file kinds.
//!
//! Renderers are pure functions over descriptors; all file I/O lives in
//! [`crate::generator`].

mod controller;
mod method;
mod module;

pub use controller::render_controller;
pub use method::render_method;
pub use module::render_module;

/// Simple template rendering: replaces `{{key}}` with value.
///
/// Go code is full of single braces, so placeholders use doubled ones and
/// the templates stay readable as plain Go.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{key}}}}}"), value);
    }
    output
}
