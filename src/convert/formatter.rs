/// Render a converted value for display
///
/// Whole numbers get no decimal places; anything else gets exactly six,
/// always fixed-point.
pub fn format(value: f64) -> String {
    if value % 1.0 == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.6}", value)
    }
}
