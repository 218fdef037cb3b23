//! Orders table binding

use crate::models::{Order, OrderFields};

use super::{Entity, EntityFields, SqliteQuery};

impl EntityFields for OrderFields {
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "start_date",
        "end_date",
        "address",
        "price",
        "customer_id",
        "executor_id",
    ];

    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name)
            .bind(self.description)
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.address)
            .bind(self.price)
            .bind(self.customer_id)
            .bind(self.executor_id)
    }
}

impl Entity for Order {
    const RESOURCE: &'static str = "order";
    const TABLE: &'static str = "orders";
    type Fields = OrderFields;
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::db::{create_pool, run_migrations, DbError, Repo, IN_MEMORY_URL};
    use crate::models::{parse_date, EntityPayload, Order, OrderFields};

    fn order(start: &str, end: &str, customer_id: i64) -> OrderFields {
        OrderFields {
            name: "Repair a bike".into(),
            description: "Front wheel is bent".into(),
            start_date: parse_date(start).unwrap(),
            end_date: parse_date(end).unwrap(),
            address: "Nevsky 10".into(),
            price: 2300,
            customer_id,
            executor_id: 2,
        }
    }

    #[tokio::test]
    async fn dates_survive_the_store() {
        let pool = create_pool(IN_MEMORY_URL).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Repo::<Order>::new(&pool);

        let id = repo
            .create(EntityPayload::new(None, order("12/20/2023", "02/29/2024", 1)))
            .await
            .unwrap();
        let stored = repo.get(id).await.unwrap();

        assert_eq!(
            stored.fields.start_date,
            NaiveDate::from_ymd_opt(2023, 12, 20).unwrap()
        );
        assert_eq!(
            stored.fields.end_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[tokio::test]
    async fn dangling_customer_is_accepted() {
        let pool = create_pool(IN_MEMORY_URL).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Repo::<Order>::new(&pool);

        let id = repo
            .create(EntityPayload::new(None, order("01/01/2024", "01/02/2024", 999)))
            .await
            .unwrap();

        assert_eq!(repo.get(id).await.unwrap().fields.customer_id, 999);
    }

    #[tokio::test]
    async fn update_of_missing_order_leaves_store_unchanged() {
        let pool = create_pool(IN_MEMORY_URL).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Repo::<Order>::new(&pool);
        let existing = order("03/01/2024", "03/05/2024", 1);
        repo.create(EntityPayload::new(Some(1), existing.clone()))
            .await
            .unwrap();

        let err = repo
            .update(2, order("04/01/2024", "04/05/2024", 5))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "order", id: 2 }));
        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![Order { id: 1, fields: existing }]);
    }
}
