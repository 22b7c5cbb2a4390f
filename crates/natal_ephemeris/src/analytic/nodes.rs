//! Ascending lunar node (North Node) longitude.
//!
//! Mean node: the fifth Delaunay argument Ω (IERS Conventions 2010,
//! Table 5.2e), referred to the mean equinox of date.
//!
//! True node: mean node plus the principal solar perturbations of the
//! lunar orbit plane, Meeus, *Astronomical Algorithms* (2nd ed.), Ch. 47.

use natal_frames::{fundamental_arguments, normalize_deg};
use serde::{Deserialize, Serialize};

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus periodic perturbations.
    True,
}

/// Perturbation terms: `[nl, nl', nF, nD, amplitude (deg)]` applied as
/// `amplitude · sin(nl·l + nl'·l' + nF·F + nD·D)`.
#[rustfmt::skip]
static TRUE_NODE_TERMS: [[f64; 5]; 5] = [
    //  l     l'    F     D     amplitude
    [ 0.0,  0.0, -2.0,  2.0, -1.4979],
    [ 0.0,  1.0,  0.0,  0.0, -0.1500],
    [ 0.0,  0.0,  0.0,  2.0, -0.1226],
    [ 0.0,  0.0,  2.0,  0.0,  0.1176],
    [ 2.0,  0.0, -2.0,  0.0, -0.0801],
];

/// Mean ascending node longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_deg(fundamental_arguments(t)[4].to_degrees())
}

/// True ascending node longitude in degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let [l, lp, f, d, om] = fundamental_arguments(t);
    let perturbation: f64 = TRUE_NODE_TERMS
        .iter()
        .map(|term| term[4] * (term[0] * l + term[1] * lp + term[2] * f + term[3] * d).sin())
        .sum();
    normalize_deg(om.to_degrees() + perturbation)
}

/// Ascending node longitude for the given mode.
pub fn ascending_node_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}
