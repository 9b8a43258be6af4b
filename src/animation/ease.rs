/// Easing curve applied to a path's local progress.
///
/// The curves are quadratic and must stay bit-exact: downstream consumers of the exported
/// motion expect the same positions for the same inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    /// Quadratic acceleration from rest.
    EaseIn,
    /// Quadratic deceleration to rest.
    EaseOut,
    /// Quadratic acceleration then deceleration.
    EaseInOut,
    /// Constant speed. Unrecognized names decode to this variant, so it stays last.
    #[default]
    #[serde(other)]
    Linear,
}

impl Interpolation {
    /// Apply this curve to normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
