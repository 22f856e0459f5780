use super::types::Polygon;

/// Stable sort by leftmost x; ties keep their input order.
///
/// A container's leftmost x never exceeds that of anything nested inside it,
/// so after this sort every container precedes its containees.
pub fn order_polygons(mut polygons: Vec<Polygon>) -> Vec<Polygon> {
    polygons.sort_by_key(Polygon::left_x);
    polygons
}

/// True if `polygons` is ascending by leftmost x.
pub fn is_ordered(polygons: &[Polygon]) -> bool {
    polygons.windows(2).all(|w| w[0].left_x() <= w[1].left_x())
}
