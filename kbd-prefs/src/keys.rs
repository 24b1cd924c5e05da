//! Preference declarations used by the settings screens

/// Internal UI state that is persisted but not user-facing
pub mod internal {
    use crate::store::BoolPref;

    /// Whether the beta information card on the home screen is collapsed
    pub const HOME_IS_BETA_TOOLBOX_COLLAPSED: BoolPref =
        BoolPref::new("internal__home_is_beta_toolbox_collapsed", false);
}
