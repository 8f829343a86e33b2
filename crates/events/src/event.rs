/// A change notification carried by the bus.
pub trait Event: Clone + core::fmt::Debug + Send + 'static {
    /// Dotted name used in logs, e.g. `session.logged_in`.
    fn event_type(&self) -> &'static str;
}
