//! Category classification.

use ldl_model::Category;

/// Map an LDL-C value to its band. First matching threshold wins.
///
/// Total over `f64`: NaN fails every comparison and lands in
/// [`Category::VeryHigh`].
pub fn classify(ldl: f64) -> Category {
    if ldl < 100.0 {
        Category::Optimal
    } else if ldl < 130.0 {
        Category::NearOptimal
    } else if ldl < 160.0 {
        Category::BorderlineHigh
    } else if ldl < 190.0 {
        Category::High
    } else {
        Category::VeryHigh
    }
}
