//! Pure projections over container snapshots. They never touch container
//! state and can be recomputed as often as needed.

use crate::model::{Amount, Archivable, Keyed, Named};

/// Shown in place of a name that cannot be resolved.
pub const PLACEHOLDER: &str = "—";

pub fn active<T: Archivable>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| !item.archived()).collect()
}

pub fn archived<T: Archivable>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.archived()).collect()
}

/// Active entries first, archived after; relative order is otherwise kept.
pub fn archived_last<T: Archivable + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.archived());
    sorted
}

pub fn total<T: Amount>(items: &[T]) -> f64 {
    // Starts from +0.0: an empty f64 `sum` yields -0.0.
    items.iter().fold(0.0, |acc, item| acc + item.amount())
}

/// Name of the entity with `id`, or [`PLACEHOLDER`] if it is not there
/// (unknown id or not loaded yet).
pub fn label<T: Keyed + Named>(items: &[T], id: i64) -> &str {
    items
        .iter()
        .find(|item| item.id() == id)
        .map_or(PLACEHOLDER, Named::name)
}

/// The first present error, in the order given.
pub fn first_error<I>(errors: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    errors.into_iter().flatten().next()
}

#[cfg(test)]
mod tests {
    use api_types::{Currency, category::Category, spend::Spend, wallet::Wallet};
    use chrono::NaiveDate;

    use super::*;

    fn category(id: i64, name: &str, archived: bool) -> Category {
        Category {
            id,
            name: name.to_string(),
            archived,
        }
    }

    fn spend(id: i64, amount: f64) -> Spend {
        Spend {
            id,
            description: format!("spend {id}"),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            spend_category_id: 1,
            wallet_id: 1,
        }
    }

    #[test]
    fn active_and_archived_partition() {
        let items = vec![
            category(1, "Food", false),
            category(2, "Old", true),
            category(3, "Rent", false),
        ];
        let active_ids: Vec<i64> = active(&items).iter().map(|c| c.id).collect();
        let archived_ids: Vec<i64> = archived(&items).iter().map(|c| c.id).collect();
        assert_eq!(active_ids, vec![1, 3]);
        assert_eq!(archived_ids, vec![2]);
    }

    #[test]
    fn archived_last_is_stable() {
        let items = vec![
            category(1, "A", true),
            category(2, "B", false),
            category(3, "C", true),
            category(4, "D", false),
        ];
        let ids: Vec<i64> = archived_last(&items).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn total_sums_amounts() {
        assert_eq!(format!("{:.2}", total::<Spend>(&[])), "0.00");
        assert!(total::<Spend>(&[]).is_sign_positive());
        assert_eq!(total(&[spend(1, 10.5), spend(2, 4.5)]), 15.0);
    }

    #[test]
    fn label_falls_back_to_placeholder() {
        let wallets = vec![Wallet {
            id: 1,
            name: "Cash".to_string(),
            balance: 100.0,
            currency: Currency::Rub,
            archived: false,
        }];
        assert_eq!(label(&wallets, 1), "Cash");
        assert_eq!(label(&wallets, 2), PLACEHOLDER);
        assert_eq!(label::<Wallet>(&[], 1), PLACEHOLDER);
    }

    #[test]
    fn first_error_wins() {
        let errors = vec![None, Some("wallets".to_string()), Some("spend".to_string())];
        assert_eq!(first_error(errors).as_deref(), Some("wallets"));
        assert_eq!(first_error(vec![None, None]), None);
    }
}
