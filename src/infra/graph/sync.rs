//! Relational → graph sync.
//!
//! Reads the shop tables and MERGEs them into Neo4j in `UNWIND` batches.
//! Every write is a MERGE, so running the sync again converges on the same
//! graph.

use std::collections::HashMap;

use neo4rs::{query, BoltType};
use rust_decimal::prelude::ToPrimitive;

use super::GraphStore;
use crate::config::GRAPH_SYNC_BATCH_SIZE;
use crate::domain::EventKind;
use crate::errors::AppResult;
use crate::infra::repositories::entities::{
    category, customer, event, order, order_item, product, CategoryEntity, CustomerEntity,
    EventEntity, OrderEntity, OrderItemEntity, ProductEntity,
};
use crate::infra::repositories::TableReader;

/// One UNWIND row
pub type GraphRow = HashMap<String, BoltType>;

const LOAD_CATEGORIES: &str = "UNWIND $rows AS row
     MERGE (c:Category {id: row.id})
     SET c.name = row.name";

const LOAD_PRODUCTS: &str = "UNWIND $rows AS row
     MERGE (p:Product {id: row.id})
     SET p.name = row.name, p.price = row.price, p.stock = row.stock
     WITH p, row
     MATCH (c:Category {id: row.category_id})
     MERGE (p)-[:IN_CATEGORY]->(c)";

const LOAD_CUSTOMERS: &str = "UNWIND $rows AS row
     MERGE (c:Customer {id: row.id})
     SET c.name = row.name, c.join_date = date(row.join_date)";

const LOAD_ORDERS: &str = "UNWIND $rows AS row
     MERGE (o:Order {id: row.id})
     SET o.ts = datetime(row.ts)
     WITH o, row
     MATCH (c:Customer {id: row.customer_id})
     MERGE (c)-[:PLACED]->(o)";

const LOAD_ORDER_ITEMS: &str = "UNWIND $rows AS row
     MATCH (o:Order {id: row.order_id})
     MATCH (p:Product {id: row.product_id})
     MERGE (o)-[r:CONTAINS]->(p)
     SET r.quantity = row.quantity";

fn load_events_query(kind: EventKind) -> String {
    // Relationship types cannot be parameterized; they come from a closed enum.
    format!(
        "UNWIND $rows AS row
         MATCH (c:Customer {{id: row.customer_id}})
         MATCH (p:Product {{id: row.product_id}})
         MERGE (c)-[r:{}]->(p)
         SET r.last_ts = datetime(row.ts)",
        kind.relationship()
    )
}

/// Rows written per table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub categories: usize,
    pub products: usize,
    pub customers: usize,
    pub orders: usize,
    pub order_items: usize,
    pub events: usize,
    /// Events with an unrecognized `event_type`
    pub skipped_events: usize,
}

/// Copies relational rows into the graph
pub struct GraphSync<'a> {
    reader: TableReader,
    store: &'a GraphStore,
}

impl<'a> GraphSync<'a> {
    pub fn new(reader: TableReader, store: &'a GraphStore) -> Self {
        Self { reader, store }
    }

    /// Extract every table, then load in dependency order.
    pub async fn run(&self) -> AppResult<SyncReport> {
        tracing::info!("Extracting data from Postgres...");
        let categories = self.reader.all::<CategoryEntity>().await?;
        let products = self.reader.all::<ProductEntity>().await?;
        let customers = self.reader.all::<CustomerEntity>().await?;
        let orders = self.reader.all::<OrderEntity>().await?;
        let order_items = self.reader.all::<OrderItemEntity>().await?;
        let events = self.reader.all::<EventEntity>().await?;

        tracing::info!(
            categories = categories.len(),
            products = products.len(),
            customers = customers.len(),
            orders = orders.len(),
            order_items = order_items.len(),
            events = events.len(),
            "Extracted relational rows"
        );

        let mut report = SyncReport {
            categories: self
                .load("categories", LOAD_CATEGORIES, categories.iter().map(category_row).collect())
                .await?,
            products: self
                .load("products", LOAD_PRODUCTS, products.iter().map(product_row).collect())
                .await?,
            customers: self
                .load("customers", LOAD_CUSTOMERS, customers.iter().map(customer_row).collect())
                .await?,
            orders: self
                .load("orders", LOAD_ORDERS, orders.iter().map(order_row).collect())
                .await?,
            order_items: self
                .load(
                    "order items",
                    LOAD_ORDER_ITEMS,
                    order_items.iter().map(order_item_row).collect(),
                )
                .await?,
            ..SyncReport::default()
        };

        let (grouped, skipped) = group_events(events);
        report.skipped_events = skipped;
        for (kind, rows) in grouped {
            report.events += self
                .load(kind.relationship(), &load_events_query(kind), rows)
                .await?;
        }

        tracing::info!(?report, "Graph sync done");
        Ok(report)
    }

    async fn load(&self, what: &str, cypher: &str, rows: Vec<GraphRow>) -> AppResult<usize> {
        if rows.is_empty() {
            tracing::debug!("No {} to load", what);
            return Ok(0);
        }

        tracing::info!("Loading {} {} into Neo4j...", rows.len(), what);
        let total = rows.len();
        for (idx, batch) in batches(rows, GRAPH_SYNC_BATCH_SIZE).into_iter().enumerate() {
            tracing::debug!(batch = idx + 1, size = batch.len(), "Writing {} batch", what);
            self.store.run(query(cypher).param("rows", batch)).await?;
        }
        Ok(total)
    }
}

/// Split `rows` into consecutive batches of at most `size` rows.
pub fn batches<T>(rows: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    let mut out = Vec::with_capacity(rows.len().div_ceil(size));
    let mut current = Vec::with_capacity(size.min(rows.len()));

    for row in rows {
        current.push(row);
        if current.len() == size {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

pub fn category_row(model: &category::Model) -> GraphRow {
    HashMap::from([
        ("id".to_string(), BoltType::from(i64::from(model.id))),
        ("name".to_string(), BoltType::from(model.name.clone())),
    ])
}

pub fn product_row(model: &product::Model) -> GraphRow {
    let mut row = HashMap::from([
        ("id".to_string(), BoltType::from(i64::from(model.id))),
        ("name".to_string(), BoltType::from(model.name.clone())),
        (
            "price".to_string(),
            BoltType::from(model.price.to_f64().unwrap_or_default()),
        ),
        ("stock".to_string(), BoltType::from(i64::from(model.stock))),
    ]);
    if let Some(category_id) = model.category_id {
        row.insert("category_id".to_string(), BoltType::from(i64::from(category_id)));
    }
    row
}

pub fn customer_row(model: &customer::Model) -> GraphRow {
    HashMap::from([
        ("id".to_string(), BoltType::from(i64::from(model.id))),
        ("name".to_string(), BoltType::from(model.name.clone())),
        (
            "join_date".to_string(),
            BoltType::from(model.join_date.format("%Y-%m-%d").to_string()),
        ),
    ])
}

pub fn order_row(model: &order::Model) -> GraphRow {
    HashMap::from([
        ("id".to_string(), BoltType::from(i64::from(model.id))),
        ("customer_id".to_string(), BoltType::from(i64::from(model.customer_id))),
        ("ts".to_string(), BoltType::from(model.ts.to_rfc3339())),
    ])
}

pub fn order_item_row(model: &order_item::Model) -> GraphRow {
    HashMap::from([
        ("order_id".to_string(), BoltType::from(i64::from(model.order_id))),
        ("product_id".to_string(), BoltType::from(i64::from(model.product_id))),
        ("quantity".to_string(), BoltType::from(i64::from(model.quantity))),
    ])
}

pub fn event_row(model: &event::Model) -> GraphRow {
    HashMap::from([
        ("customer_id".to_string(), BoltType::from(i64::from(model.customer_id))),
        ("product_id".to_string(), BoltType::from(i64::from(model.product_id))),
        ("ts".to_string(), BoltType::from(model.ts.to_rfc3339())),
    ])
}

/// Split events by kind, oldest first so the newest timestamp wins on MERGE.
///
/// Returns the groups in [`EventKind::ALL`] order and the number of events
/// whose type is unknown.
pub fn group_events(mut events: Vec<event::Model>) -> (Vec<(EventKind, Vec<GraphRow>)>, usize) {
    events.sort_by(|a, b| a.ts.cmp(&b.ts).then(a.id.cmp(&b.id)));

    let mut grouped: Vec<(EventKind, Vec<GraphRow>)> =
        EventKind::ALL.iter().map(|k| (*k, Vec::new())).collect();
    let mut skipped = 0;

    for ev in &events {
        match EventKind::parse(&ev.event_type) {
            Some(kind) => {
                if let Some((_, rows)) = grouped.iter_mut().find(|(k, _)| *k == kind) {
                    rows.push(event_row(ev));
                }
            }
            None => {
                tracing::warn!(event_id = ev.id, "Skipping event with unknown type '{}'", ev.event_type);
                skipped += 1;
            }
        }
    }

    grouped.retain(|(_, rows)| !rows.is_empty());
    (grouped, skipped)
}
