//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// First item with the given identifier, if any.
///
/// Collections here are small, insertion-ordered lists (cart lines, fetched
/// product pages), so a linear scan is the right tool.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

/// Mutable variant of [`find_by_id`] for in-place updates.
pub fn find_by_id_mut<'a, E: Entity>(items: &'a mut [E], id: &E::Id) -> Option<&'a mut E> {
    items.iter_mut().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Sku {
        code: String,
        on_hand: u32,
    }

    impl Entity for Sku {
        type Id = String;

        fn id(&self) -> &Self::Id {
            &self.code
        }
    }

    fn skus() -> Vec<Sku> {
        vec![
            Sku {
                code: "SKU-1".to_string(),
                on_hand: 3,
            },
            Sku {
                code: "SKU-2".to_string(),
                on_hand: 7,
            },
        ]
    }

    #[test]
    fn find_by_id_returns_the_matching_item() {
        let items = skus();
        let found = find_by_id(&items, &"SKU-2".to_string()).unwrap();
        assert_eq!(found.on_hand, 7);
    }

    #[test]
    fn find_by_id_misses_unknown_ids() {
        let items = skus();
        assert!(find_by_id(&items, &"SKU-9".to_string()).is_none());
    }

    #[test]
    fn find_by_id_mut_allows_in_place_updates() {
        let mut items = skus();
        find_by_id_mut(&mut items, &"SKU-1".to_string())
            .unwrap()
            .on_hand = 0;
        assert_eq!(items[0].on_hand, 0);
    }
}
