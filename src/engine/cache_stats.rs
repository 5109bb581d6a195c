use std::ops::{Add, AddAssign};

/// Memo hits and misses over the life of an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    hits: usize,
    misses: usize,
}

impl CacheStats {
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn lookups(&self) -> usize {
        self.hits + self.misses
    }
}

impl Add<bool> for CacheStats {
    type Output = CacheStats;

    fn add(mut self, cache_hit: bool) -> Self::Output {
        self += cache_hit;
        self
    }
}

impl AddAssign<bool> for CacheStats {
    fn add_assign(&mut self, cache_hit: bool) {
        if cache_hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_bool() {
        assert_eq!(CacheStats { hits: 1, misses: 0 }, CacheStats::default() + true);
        assert_eq!(CacheStats { hits: 0, misses: 1 }, CacheStats::default() + false);
    }

    #[test]
    fn add_assign_bool() {
        let mut cs = CacheStats::default();
        cs += false;
        cs += true;
        cs += true;
        assert_eq!(2, cs.hits());
        assert_eq!(1, cs.misses());
        assert_eq!(3, cs.lookups());
    }
}
