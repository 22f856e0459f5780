//! One clustering pass over a leftmost-x sorted sequence.

use crate::geom::{contains, Polygon};
use crate::NestError;

use super::types::{Cluster, NestCfg};

/// Partition `polygons` (ascending by leftmost x) into clusters.
///
/// Each polygon joins the first existing cluster, in creation order, whose
/// outer contains its first vertex; otherwise it opens a new cluster at the
/// end. Sorting guarantees every possible container has been seen already.
pub fn build_clusters<'a, I>(polygons: I, cfg: NestCfg) -> Result<Vec<Cluster<'a>>, NestError>
where
    I: IntoIterator<Item = &'a Polygon>,
{
    cfg.ray.validate()?;
    let mut clusters: Vec<Cluster<'a>> = Vec::new();
    for poly in polygons {
        let mut home = None;
        for (k, cluster) in clusters.iter().enumerate() {
            if contains(cluster.outer, poly.first(), cfg.ray)? {
                home = Some(k);
                break;
            }
        }
        match home {
            Some(k) => {
                if cfg.verify_nesting {
                    verify_nested(clusters[k].outer, poly, cfg)?;
                }
                clusters[k].inner.push(poly);
            }
            None => clusters.push(Cluster::new(poly)),
        }
    }
    Ok(clusters)
}

fn verify_nested(outer: &Polygon, inner: &Polygon, cfg: NestCfg) -> Result<(), NestError> {
    for &v in &inner.points()[1..] {
        if !contains(outer, v, cfg.ray)? {
            return Err(NestError::AmbiguousTopology {
                outer: outer.id(),
                inner: inner.id(),
            });
        }
    }
    Ok(())
}
