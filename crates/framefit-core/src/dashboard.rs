#![forbid(unsafe_code)]

//! Dashboard identifier table: which embedded dashboards exist, which of
//! them the host is willing to resize, and how their iframes are found.

/// Identity of an embedded dashboard, as reported over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardId {
    /// Industry outlook / key challenges dashboard.
    IndustryOutlook,
    /// Merchant metrics dashboard.
    MerchantDashboard,
    /// Geographic map dashboard. Uses a fixed height; never resized
    /// (see [`DashboardId::is_resizable`]).
    Map,
}

impl DashboardId {
    /// All known identifiers.
    pub const ALL: [Self; 3] = [Self::IndustryOutlook, Self::MerchantDashboard, Self::Map];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndustryOutlook => "industry-outlook",
            Self::MerchantDashboard => "merchant-dashboard",
            Self::Map => "map-dashboard",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "industry-outlook" => Some(Self::IndustryOutlook),
            "merchant-dashboard" => Some(Self::MerchantDashboard),
            "map-dashboard" => Some(Self::Map),
            _ => None,
        }
    }

    /// Whether a height report from this dashboard may be applied.
    ///
    /// The map dashboard is excluded: resizing its iframe changes its
    /// rendered height, which emits a fresh report, which resizes again.
    /// The safelist breaks that cycle at the host.
    #[must_use]
    pub const fn is_resizable(self) -> bool {
        match self {
            Self::IndustryOutlook | Self::MerchantDashboard => true,
            Self::Map => false,
        }
    }

    /// Lowercase substring an iframe `src` must contain to belong to
    /// this dashboard. `None` for dashboards the host never resizes.
    #[must_use]
    pub const fn frame_src_pattern(self) -> Option<&'static str> {
        match self {
            Self::IndustryOutlook => Some("industry_outlook_key_challenge"),
            Self::MerchantDashboard => Some("merchant-dashboard"),
            Self::Map => None,
        }
    }

    /// Whether `src` identifies one of this dashboard's iframes.
    /// Matching is ASCII-case-insensitive over the frame URL.
    #[must_use]
    pub fn matches_frame_src(self, src: &str) -> bool {
        let Some(pattern) = self.frame_src_pattern() else {
            return false;
        };
        src.to_ascii_lowercase().contains(pattern)
    }
}

impl core::fmt::Display for DashboardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_round_trips_all_ids() {
        for id in DashboardId::ALL {
            assert_eq!(DashboardId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_case_variants() {
        assert_eq!(DashboardId::parse("Industry-Outlook"), None);
        assert_eq!(DashboardId::parse("weather-dashboard"), None);
        assert_eq!(DashboardId::parse(""), None);
    }

    #[test]
    fn map_dashboard_is_not_resizable() {
        assert!(DashboardId::IndustryOutlook.is_resizable());
        assert!(DashboardId::MerchantDashboard.is_resizable());
        assert!(!DashboardId::Map.is_resizable());
    }

    #[test]
    fn frame_matching_is_case_insensitive() {
        assert!(
            DashboardId::IndustryOutlook
                .matches_frame_src("https://example.com/Industry_Outlook_Key_Challenge.html")
        );
        assert!(
            DashboardId::MerchantDashboard
                .matches_frame_src("https://example.com/embed/MERCHANT-DASHBOARD?v=2")
        );
    }

    #[test]
    fn map_dashboard_matches_no_frame() {
        assert!(!DashboardId::Map.matches_frame_src("https://example.com/map-dashboard.html"));
    }

    #[test]
    fn unrelated_src_does_not_match() {
        assert!(!DashboardId::IndustryOutlook.matches_frame_src("https://example.com/video"));
    }
}
