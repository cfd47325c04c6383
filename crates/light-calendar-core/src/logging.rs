//! Logging facilities.
//!
//! light-calendar uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("light_calendar=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "light_calendar_core::signal";
    /// Settings holder target.
    pub const SETTINGS: &str = "light_calendar::settings";
    /// Month view target.
    pub const MONTH_VIEW: &str = "light_calendar::month_view";
    /// Paging container target.
    pub const PAGER: &str = "light_calendar::pager";
    /// Page adapter target.
    pub const ADAPTER: &str = "light_calendar::adapter";
    /// Calendar carousel target.
    pub const CAROUSEL: &str = "light_calendar::carousel";
    /// Styling attribute loading target.
    pub const ATTRIBUTES: &str = "light_calendar::attributes";
}
