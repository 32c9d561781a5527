//! 随机抽样

use rand::seq::SliceRandom;
use rand::Rng;

/// 每日选取的单词数
pub const DEFAULT_DAILY_COUNT: usize = 10;

/// 打乱后取前 `count` 个，不放回
///
/// 数量不足 `count` 时返回全部
pub fn select_random<T, R>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_takes_exactly_count_without_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..50).collect();

        let picked = select_random(items, DEFAULT_DAILY_COUNT, &mut rng);
        assert_eq!(picked.len(), DEFAULT_DAILY_COUNT);

        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), DEFAULT_DAILY_COUNT);
        assert!(picked.iter().all(|v| *v < 50));
    }

    #[test]
    fn test_small_population_returns_all() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut picked = select_random(vec![3, 1, 2], DEFAULT_DAILY_COUNT, &mut rng);
        picked.sort();
        assert_eq!(picked, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked: Vec<u8> = select_random(Vec::new(), DEFAULT_DAILY_COUNT, &mut rng);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_selection_varies_between_seeds() {
        let items: Vec<u32> = (0..100).collect();
        let a = select_random(items.clone(), 10, &mut StdRng::seed_from_u64(1));
        let b = select_random(items, 10, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }
}
