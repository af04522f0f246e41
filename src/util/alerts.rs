//! Auto-dismissal of transient notification banners.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// A dismissible banner rendered by the page template.
pub trait AlertBanner {
    /// Banners flagged `alert-permanent` stay on screen.
    fn is_permanent(&self) -> bool;
    fn close(&self);
}

/// Finds the banners currently on the page.
pub trait AlertSource {
    fn alerts(&self) -> Vec<Box<dyn AlertBanner>>;
}

/// Close every non-permanent banner and return how many were closed.
pub fn dismiss_transient(source: &dyn AlertSource) -> usize {
    let mut closed = 0;
    for alert in source.alerts() {
        if alert.is_permanent() {
            continue;
        }
        alert.close();
        closed += 1;
    }
    closed
}
