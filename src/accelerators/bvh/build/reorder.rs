/// Applies a permutation through a scratch buffer: afterwards
/// `items[p]` holds what was at `items[order[p]]`.
pub fn small_item_reorder<T: Clone>(items: &mut [T], temp: &mut Vec<T>, order: &[usize]) {
    assert_eq!(items.len(), order.len());
    temp.clear();
    temp.extend(order.iter().map(|&i| items[i].clone()));
    items.clone_from_slice(temp);
}

/// Same result as [`small_item_reorder`] without copying the items, by
/// walking the cycles of the permutation. `visited` is scratch space.
pub fn large_item_reorder<T>(items: &mut [T], visited: &mut Vec<bool>, order: &[usize]) {
    assert_eq!(items.len(), order.len());
    visited.clear();
    visited.resize(items.len(), false);

    for start in 0..items.len() {
        if visited[start] {
            continue;
        }
        let mut j = start;
        loop {
            visited[j] = true;
            let k = order[j];
            if k == start {
                break;
            }
            debug_assert!(!visited[k], "order is not a permutation");
            items.swap(j, k);
            j = k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        let mut temp = Vec::new();
        small_item_reorder(&mut items, &mut temp, &[3, 0, 4, 1, 2]);
        assert_eq!(items, vec!['d', 'a', 'e', 'b', 'c']);
    }

    #[test]
    fn test_002() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        let mut visited = Vec::new();
        large_item_reorder(&mut items, &mut visited, &[3, 0, 4, 1, 2]);
        assert_eq!(items, vec!['d', 'a', 'e', 'b', 'c']);
    }

    #[test]
    fn test_003() {
        // Both variants agree on a permutation with several cycles.
        let order = vec![5, 2, 1, 0, 4, 7, 6, 3];
        let original: Vec<String> = (0..8).map(|i| format!("item{}", i)).collect();

        let mut a = original.clone();
        small_item_reorder(&mut a, &mut Vec::new(), &order);
        let mut b = original.clone();
        large_item_reorder(&mut b, &mut Vec::new(), &order);

        assert_eq!(a, b);
        for p in 0..order.len() {
            assert_eq!(a[p], original[order[p]]);
        }
    }

    #[test]
    fn test_004() {
        let mut items: Vec<u32> = Vec::new();
        large_item_reorder(&mut items, &mut Vec::new(), &[]);
        small_item_reorder(&mut items, &mut Vec::new(), &[]);
        assert!(items.is_empty());
    }
}
