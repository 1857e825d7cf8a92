//! Filter engine - visible subset of a record collection
//!
//! `is_visible` is pure and total: unknown category values simply match
//! nothing, they are never an error.

mod criteria;

pub use criteria::{ALL_KEYWORD, Criterion, FilterCriteria};

use shared::models::User;
use shared::order::KitchenOrder;

/// A record the filter engine can classify
pub trait Filterable {
    /// Attribute compared against [`FilterCriteria::status`]
    fn status_key(&self) -> &str;

    /// Attribute compared against [`FilterCriteria::category`]
    fn category_key(&self) -> &str;

    /// Texts searched by [`FilterCriteria::search`]
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Filterable for KitchenOrder {
    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn category_key(&self) -> &str {
        self.kind.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.id.as_str()];
        fields.extend(self.items.iter().map(|line| line.name.as_str()));
        fields
    }
}

impl Filterable for User {
    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn category_key(&self) -> &str {
        self.profile.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// True iff every active dimension of `criteria` matches `record`
pub fn is_visible<R: Filterable + ?Sized>(record: &R, criteria: &FilterCriteria) -> bool {
    if !criteria.status.matches(record.status_key()) {
        return false;
    }
    if !criteria.category.matches(record.category_key()) {
        return false;
    }
    match &criteria.search {
        None => true,
        Some(needle) => record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str())),
    }
}

/// Visible records, in input order
pub fn visible<'a, R, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a R>
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter(|record| is_visible(*record, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{UserProfile, UserStatus};
    use shared::order::{OrderKind, OrderLine, OrderStatus};

    fn order(id: &str, status: OrderStatus, kind: OrderKind) -> KitchenOrder {
        let mut order = KitchenOrder::new(id, kind).with_item(OrderLine::new("Pão de queijo", 4));
        order.status = status;
        order
    }

    fn user(name: &str, email: &str, profile: UserProfile, status: UserStatus) -> User {
        User {
            id: 1,
            name: name.into(),
            email: email.into(),
            phone: None,
            profile,
            status,
            created_at: 0,
        }
    }

    #[test]
    fn test_in_progress_filter_scenario() {
        let orders = [
            order("#1", OrderStatus::InProgress, OrderKind::DineIn),
            order("#2", OrderStatus::Pending, OrderKind::DineIn),
        ];
        let criteria = FilterCriteria::new("InProgress", "all");
        let shown = visible(&orders, &criteria);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "#1");
    }

    #[test]
    fn test_all_all_shows_everything() {
        let criteria = FilterCriteria::all();
        for status in OrderStatus::ALL {
            for kind in OrderKind::ALL {
                assert!(is_visible(&order("#x", status, kind), &criteria));
            }
        }
    }

    #[test]
    fn test_is_visible_is_deterministic() {
        let record = order("#9", OrderStatus::Ready, OrderKind::Delivery);
        let criteria = FilterCriteria::new("ready", "DELIVERY");
        let first = is_visible(&record, &criteria);
        let second = is_visible(&record, &criteria);
        assert!(first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dimensions_are_conjunctive() {
        let record = order("#3", OrderStatus::Ready, OrderKind::Takeout);
        assert!(!is_visible(&record, &FilterCriteria::new("Ready", "DineIn")));
        assert!(!is_visible(&record, &FilterCriteria::new("Pending", "Takeout")));
        assert!(is_visible(&record, &FilterCriteria::new("Ready", "Takeout")));
    }

    #[test]
    fn test_unknown_category_yields_empty_set() {
        let orders = [
            order("#1", OrderStatus::Pending, OrderKind::DineIn),
            order("#2", OrderStatus::Ready, OrderKind::Takeout),
        ];
        let shown = visible(&orders, &FilterCriteria::new("all", "Drone"));
        assert!(shown.is_empty());
    }

    #[test]
    fn test_user_search_matches_name_or_email() {
        let users = [
            user("Ana Souza", "ana@casa.com", UserProfile::Waiter, UserStatus::Active),
            user("Bruno Lima", "bruno@casa.com", UserProfile::Cook, UserStatus::Active),
        ];
        let criteria = FilterCriteria::all().with_search(Some("SOUZA"));
        let shown = visible(&users, &criteria);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Ana Souza");

        let criteria = FilterCriteria::all().with_search(Some("bruno@"));
        assert_eq!(visible(&users, &criteria)[0].name, "Bruno Lima");
    }

    #[test]
    fn test_user_profile_and_status_filter() {
        let users = [
            user("Ana", "a@x.com", UserProfile::Waiter, UserStatus::Active),
            user("Caio", "c@x.com", UserProfile::Waiter, UserStatus::Inactive),
            user("Duda", "d@x.com", UserProfile::Cashier, UserStatus::Active),
        ];
        let criteria = FilterCriteria::new("active", "waiter");
        let shown = visible(&users, &criteria);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Ana");
    }

    #[test]
    fn test_order_search_by_item_name() {
        let record = order("#5", OrderStatus::Pending, OrderKind::DineIn);
        let criteria = FilterCriteria::all().with_search(Some("queijo"));
        assert!(is_visible(&record, &criteria));
    }
}
