//! Navigation shell state.
//!
//! Top-level links plus the on/off menu overlay used on narrow terminals.

/// Entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    /// Landing page
    Home,
    /// Features section
    Features,
    /// How-it-works section
    HowItWorks,
    /// This dashboard
    Dashboard,
    /// Tracking page (button)
    TrackPackage,
    /// Registration page (button)
    RegisterShipment,
}

impl NavLink {
    /// Entries in display order.
    pub const ALL: [NavLink; 6] = [
        NavLink::Home,
        NavLink::Features,
        NavLink::HowItWorks,
        NavLink::Dashboard,
        NavLink::TrackPackage,
        NavLink::RegisterShipment,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Features => "Features",
            NavLink::HowItWorks => "How It Works",
            NavLink::Dashboard => "Dashboard",
            NavLink::TrackPackage => "Track Package",
            NavLink::RegisterShipment => "Register Shipment",
        }
    }

    /// Route reference.
    pub fn href(self) -> &'static str {
        match self {
            NavLink::Home => "/",
            NavLink::Features => "#features",
            NavLink::HowItWorks => "#how-it-works",
            NavLink::Dashboard => "/dashboard",
            NavLink::TrackPackage => "/track",
            NavLink::RegisterShipment => "/register-shipment",
        }
    }

    /// Buttons render boxed; plain links do not.
    pub fn is_button(self) -> bool {
        matches!(self, NavLink::TrackPackage | NavLink::RegisterShipment)
    }
}

/// Menu overlay state.
///
/// Snapshots are immutable; every transition returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    is_open: bool,
    highlighted: usize,
}

impl NavState {
    /// Whether the overlay is shown.
    pub fn is_open(self) -> bool {
        self.is_open
    }

    /// Open the overlay with the first entry highlighted.
    pub fn open(self) -> Self {
        Self {
            is_open: true,
            highlighted: 0,
        }
    }

    /// Hide the overlay.
    pub fn close(self) -> Self {
        Self {
            is_open: false,
            ..self
        }
    }

    /// Highlight the next entry, wrapping to the first.
    pub fn next(self) -> Self {
        Self {
            highlighted: (self.highlighted + 1) % NavLink::ALL.len(),
            ..self
        }
    }

    /// Highlight the previous entry, wrapping to the last.
    pub fn prev(self) -> Self {
        Self {
            highlighted: (self.highlighted + NavLink::ALL.len() - 1) % NavLink::ALL.len(),
            ..self
        }
    }

    /// Currently highlighted entry.
    pub fn highlighted(self) -> NavLink {
        NavLink::ALL[self.highlighted % NavLink::ALL.len()]
    }
}
