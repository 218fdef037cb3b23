//! Offers table binding

use crate::models::{Offer, OfferFields};

use super::{Entity, EntityFields, SqliteQuery};

impl EntityFields for OfferFields {
    const COLUMNS: &'static [&'static str] = &["order_id", "executor_id"];

    fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.order_id).bind(self.executor_id)
    }
}

impl Entity for Offer {
    const RESOURCE: &'static str = "offer";
    const TABLE: &'static str = "offers";
    type Fields = OfferFields;
}

#[cfg(test)]
mod tests {
    use crate::db::{create_pool, run_migrations, Repo, IN_MEMORY_URL};
    use crate::models::{EntityPayload, Offer, OfferFields, Order};

    #[tokio::test]
    async fn deleting_an_order_keeps_its_offers() {
        let pool = create_pool(IN_MEMORY_URL).await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO orders (id, name, description, start_date, end_date, address, price, customer_id, executor_id) \
             VALUES (1, 'n', 'd', '2024-01-01', '2024-01-02', 'a', 1, 1, 2)",
        )
        .execute(&pool)
        .await
        .unwrap();
        let offers = Repo::<Offer>::new(&pool);
        offers
            .create(EntityPayload::new(
                Some(1),
                OfferFields {
                    order_id: 1,
                    executor_id: 2,
                },
            ))
            .await
            .unwrap();

        Repo::<Order>::new(&pool).delete(1).await.unwrap();

        let remaining = offers.get(1).await.unwrap();
        assert_eq!(remaining.fields.order_id, 1);
    }
}
