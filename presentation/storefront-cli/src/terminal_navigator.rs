use business::domain::checkout::services::Navigator;

/// There is no page to leave in a terminal; announce the hand-off instead.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn leave_checkout(&self) {
        eprintln!("Checkout complete, returning to the catalog.");
    }
}
