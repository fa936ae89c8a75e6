use crate::core::VisibleSamples;
use crate::interaction::Modifiers;
use crate::render::RedrawRequest;

/// Collaborators a chart view needs from its host UI surface.
///
/// All calls happen on the UI thread. Results computed elsewhere must be
/// marshalled first (see [`super::ChartView::task_sender`]).
pub trait ChartHost {
    /// Samples currently plotted, grouped by series.
    fn visible_samples(&self) -> &VisibleSamples;

    /// Current modifier-key state.
    fn modifiers(&self) -> Modifiers {
        Modifiers::default()
    }

    /// Invalidate signal; hosts may coalesce requests per frame.
    fn request_redraw(&mut self, request: RedrawRequest);

    /// Updates the tooltip label; `None` hides it.
    fn show_tooltip(&mut self, label: Option<&str>);
}

/// Headless host used by tests and non-interactive embedding.
///
/// Records every redraw request and tooltip update instead of painting.
#[derive(Debug, Default)]
pub struct NullHost {
    pub samples: VisibleSamples,
    pub modifiers: Modifiers,
    pub redraw_requests: Vec<RedrawRequest>,
    pub tooltip: Option<String>,
    pub tooltip_updates: usize,
}

impl NullHost {
    #[must_use]
    pub fn with_samples(samples: VisibleSamples) -> Self {
        Self {
            samples,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn last_redraw(&self) -> Option<RedrawRequest> {
        self.redraw_requests.last().copied()
    }
}

impl ChartHost for NullHost {
    fn visible_samples(&self) -> &VisibleSamples {
        &self.samples
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn request_redraw(&mut self, request: RedrawRequest) {
        self.redraw_requests.push(request);
    }

    fn show_tooltip(&mut self, label: Option<&str>) {
        self.tooltip = label.map(str::to_owned);
        self.tooltip_updates += 1;
    }
}
