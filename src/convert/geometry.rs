/// A bone's bind-pose affine matrix, `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BindPose {
    matrix: nalgebra::Matrix3<f64>,
}

impl BindPose {
    /// From the `[a, b, c, d, tx, ty]` layout used by DragonBones.
    pub fn from_components(components: [f64; 6]) -> Self {
        let [a, b, c, d, tx, ty] = components;
        Self {
            matrix: nalgebra::Matrix3::new(
                a, c, tx,
                b, d, ty,
                0.0, 0.0, 1.0,
            )
        }
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let point = self.matrix * nalgebra::Point3::new(x, y, 1.0);
        (point.x, point.y)
    }
}

/// Outer silhouette of a triangle list as a chain of vertex index pairs.
///
/// An edge belongs to the silhouette when exactly one triangle uses it.
/// Edges keep the winding of the triangle that owns them and are ordered so
/// that each edge starts where the previous one ended.
pub fn hull_edges(triangles: &[u32]) -> Vec<u32> {
    let mut boundary: Vec<(u32, u32)> = Vec::new();
    for triangle in triangles.chunks_exact(3) {
        let sides = [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ];
        for &(from, to) in sides.iter() {
            let shared = boundary.iter().position(|&(a, b)| (a == from && b == to) || (a == to && b == from));
            match shared {
                Some(index) => { boundary.remove(index); },
                None => boundary.push((from, to)),
            }
        }
    }

    let mut chained = Vec::with_capacity(boundary.len() * 2);
    while !boundary.is_empty() {
        let (from, mut to) = boundary.remove(0);
        chained.push(from);
        chained.push(to);
        while let Some(index) = boundary.iter().position(|&(a, _)| a == to) {
            let (next_from, next_to) = boundary.remove(index);
            chained.push(next_from);
            chained.push(next_to);
            to = next_to;
        }
    }
    chained
}
