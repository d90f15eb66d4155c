//! Progress-bar rendering into an external UI slot.
//!
//! The registry knows nothing about menus or inventories; it pushes one
//! [`IconUpdate`] per render call through the [`ProgressSink`] seam and
//! retains nothing afterwards. Rendering is disabled entirely while no
//! [`IconTemplate`] is configured on the processor.

use gridmill_core::Operation;

/// Template for the progress-bar icon, configured once per processor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconTemplate {
    /// Display name of the icon (e.g. the machine's activity).
    pub name: String,
    /// Glyph shown in the slot.
    pub glyph: char,
}

impl IconTemplate {
    /// Create a template with the given display name and glyph.
    pub fn new(name: impl Into<String>, glyph: char) -> Self {
        Self {
            name: name.into(),
            glyph,
        }
    }
}

/// One rendered progress update, pushed to a UI slot.
#[derive(Clone, Debug, PartialEq)]
pub struct IconUpdate {
    /// The configured template.
    pub template: IconTemplate,
    /// Human-readable completion label, e.g. `"70%"`.
    pub label: String,
    /// Completion ratio in `[0, 1]`.
    pub ratio: f64,
}

/// The external UI slot abstraction consumed by progress rendering.
///
/// Implementations map `slot` indices onto whatever menu or inventory
/// surface the host application renders.
pub trait ProgressSink {
    /// Replace the icon at `slot` with `icon`.
    fn set_icon(&mut self, slot: usize, icon: IconUpdate);
}

/// Completion ratio for an operation's counters.
///
/// `(total - remaining) / total`, with a zero total treated as fully
/// complete rather than a division fault.
pub fn completion_ratio(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return 1.0;
    }
    f64::from(total.saturating_sub(remaining)) / f64::from(total)
}

/// Render `operation`'s progress into `slot` of `sink`.
///
/// No-op when `template` is `None`. Otherwise issues exactly one
/// [`ProgressSink::set_icon`] call with the template and a percentage
/// label; no reference to `operation` is retained beyond the call.
pub fn render<T: Operation + ?Sized>(
    template: Option<&IconTemplate>,
    sink: &mut dyn ProgressSink,
    slot: usize,
    operation: &T,
) {
    let Some(template) = template else {
        // No progress bar, nothing to update.
        return;
    };

    let ratio = completion_ratio(operation.remaining_ticks(), operation.total_ticks());
    let percent = (ratio * 100.0).round() as u32;
    sink.set_icon(
        slot,
        IconUpdate {
            template: template.clone(),
            label: format!("{percent}%"),
            ratio,
        },
    );
}
