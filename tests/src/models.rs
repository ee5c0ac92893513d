use chrono::NaiveDateTime;
use poco::{Poco, PocoEnum};
use rust_decimal::Decimal;

#[derive(Debug, Default, Clone, Copy, PartialEq, PocoEnum)]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Deleted,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PocoEnum)]
pub enum OrderLineStatus {
    #[default]
    Pending,
    Allocated,
}

#[derive(Debug, Default, Clone, PartialEq, Poco)]
#[table = "People"]
pub struct Person {
    #[column("Id")]
    pub id: i64,

    #[column("Name")]
    pub name: String,

    #[column("Age")]
    pub age: i64,

    #[column("Height")]
    pub height: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Poco)]
#[table = "Orders"]
pub struct Order {
    #[column("Id")]
    pub id: i64,

    #[column("PersonId")]
    pub person_id: i64,

    #[column("PoNumber")]
    pub po_number: String,

    #[column("Status")]
    pub status: OrderStatus,

    #[column("CreatedOn")]
    pub created_on: NaiveDateTime,

    #[column("CreatedBy")]
    pub created_by: String,

    #[skip]
    pub person: Option<Person>,

    #[skip]
    pub order_lines: Vec<OrderLine>,
}

#[derive(Debug, Default, Clone, PartialEq, Poco)]
#[table = "OrderLines"]
pub struct OrderLine {
    #[column("Id")]
    pub id: i64,

    #[column("OrderId")]
    pub order_id: i64,

    #[column("Quantity")]
    pub quantity: i16,

    #[column("SellPrice")]
    pub sell_price: Decimal,

    #[column("Status")]
    pub status: OrderLineStatus,

    /// Computed by queries that select it
    #[column("Total")]
    #[read_only]
    pub total: Decimal,
}
