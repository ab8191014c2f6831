use crate::{Item, RngState};

/// Picks one item with probability `weight / total`.
///
/// When every weight is zero the pick is uniform instead. Returns `None` only for an
/// empty slice, which callers rule out by checking the filter result first.
pub fn pick_weighted<'a>(items: &[&'a Item], rng: &mut RngState) -> Option<&'a Item> {
    let last = *items.last()?;
    let total: u64 = items.iter().map(|item| item.weight()).sum();
    if total == 0 {
        let idx = rng.below(items.len() as u64) as usize;
        return items.get(idx).copied().or(Some(last));
    }
    let roll = rng.below(total);
    let mut cumulative = 0u64;
    for item in items {
        cumulative += item.weight();
        if roll < cumulative {
            return Some(*item);
        }
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(name: &str, count: u32) -> Item {
        Item::new(name, ["T"], Vec::<String>::new()).with_count(count)
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = RngState::from_seed(1);
        assert!(pick_weighted(&[], &mut rng).is_none());
    }

    #[test]
    fn zero_weight_never_picked_beside_positive() {
        let items = [weighted("never", 0), weighted("always", 2)];
        let refs: Vec<&Item> = items.iter().collect();
        let mut rng = RngState::from_seed(9);
        for _ in 0..200 {
            let picked = pick_weighted(&refs, &mut rng).expect("pick");
            assert_eq!(picked.name, "always");
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let items = [weighted("a", 0), weighted("b", 0), weighted("c", 0)];
        let refs: Vec<&Item> = items.iter().collect();
        let mut rng = RngState::from_seed(21);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let picked = pick_weighted(&refs, &mut rng).expect("pick");
            let idx = items.iter().position(|i| i.name == picked.name).expect("known");
            seen[idx] += 1;
        }
        for count in seen {
            assert!(count > 800, "uniform share too small: {seen:?}");
        }
    }

    #[test]
    fn picks_are_members_of_the_pool() {
        let items: Vec<Item> = (0..12).map(|i| weighted(&format!("i{i}"), i % 4)).collect();
        let mut rng = RngState::from_seed(5);
        for len in 1..=items.len() {
            let refs: Vec<&Item> = items[..len].iter().collect();
            for _ in 0..50 {
                let picked = pick_weighted(&refs, &mut rng).expect("pick");
                assert!(refs.iter().any(|r| std::ptr::eq(*r, picked)));
            }
        }
    }
}
