use nalgebra::Vector2;

use std::collections::VecDeque;

/// The recent positions of a body, oldest first. Once full, every push
/// evicts exactly one sample from the front.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vector2<f64>>,
    capacity: usize,
}

impl Trail {
    /// Callers check the capacity first; see `Body::new`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Trail capacity must be positive");
        Trail {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vector2<f64>) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&Vector2<f64>> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&Vector2<f64>> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> + '_ {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64) -> Vector2<f64> {
        Vector2::new(x, 0.0)
    }

    #[test]
    fn test_fills_in_order() {
        let mut trail = Trail::with_capacity(4);
        assert!(trail.is_empty());

        for i in 0..3 {
            trail.push(pt(i as f64));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_evicts_one_at_capacity() {
        let mut trail = Trail::with_capacity(500);
        for i in 0..500 {
            trail.push(pt(i as f64));
        }
        assert_eq!(trail.len(), 500);
        assert_eq!(trail.oldest(), Some(&pt(0.0)));

        trail.push(pt(500.0));
        assert_eq!(trail.len(), 500);
        assert_eq!(trail.oldest(), Some(&pt(1.0)));
        assert_eq!(trail.newest(), Some(&pt(500.0)));

        for i in 501..2000 {
            trail.push(pt(i as f64));
            assert!(trail.len() <= trail.capacity());
        }
        assert_eq!(trail.oldest(), Some(&pt(1500.0)));
    }

    #[test]
    fn test_keeps_duplicates() {
        let mut trail = Trail::with_capacity(3);
        trail.push(pt(1.0));
        trail.push(pt(1.0));
        assert_eq!(trail.len(), 2);
    }
}
