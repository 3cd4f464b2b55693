use tracker_core::model::ProgressMetrics;
use tracker_core::percent::clamp_percent;

/// Width and label for a progress bar, already clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBarVm {
    /// CSS width value without the `%` suffix, one decimal place.
    pub width: String,
    pub label: String,
}

impl ProgressBarVm {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        let clamped = clamp_percent(percent);
        Self {
            width: format!("{clamped:.1}"),
            label: format!("{clamped:.1}%"),
        }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!("width:{}%", self.width)
    }
}

/// "`completed` / `total` tasks complete"
#[must_use]
pub fn tasks_complete_label(progress: &ProgressMetrics) -> String {
    format!(
        "{} / {} tasks complete",
        progress.completed, progress.total
    )
}
