use poco::{Escaper, Value};
use pretty_assertions::assert_eq;
use tests::{models::*, *};

// ---
// Single result set

#[tokio::test]
async fn single_result_set_with_single_poco() {
    let fixture = setup().await;
    fixture.add_people(1, 0).await;

    let people: Escaper<Person> = fixture.db.escaper();
    let sql = format!(
        "SELECT * FROM {} WHERE {} LIKE @0 || '%';",
        people.table_name(None),
        assert_ok!(people.column_name(Person::fields().name(), None)),
    );

    let mut multi = assert_ok!(fixture.db.query_multiple(&sql, &[Value::from("Peta")]).await);
    let result = assert_ok!(assert_ok!(multi.read::<Person>()).collect_all());
    multi.dispose();

    assert_eq!(result.len(), 1);

    let person = &result[0];
    assert_eq!(person.id, 1);
    assert!(person.name.starts_with("Peta"));
    assert_eq!(person.age, 18);
    assert_eq!(person.height, 160);

    let op = fixture.log.last().unwrap();
    assert_eq!(op.sql, "SELECT * FROM [People] WHERE [Name] LIKE @0 || '%';");
    assert_eq!(op.params, [Value::from("Peta")]);
}

#[tokio::test]
async fn single_result_set_with_multi_poco() {
    let fixture = setup().await;
    fixture.add_orders(1).await;

    let people: Escaper<Person> = fixture.db.escaper();
    let orders: Escaper<Order> = fixture.db.escaper();

    let sql = format!(
        "SELECT * FROM {} o
         INNER JOIN {} p ON p.{} = o.{}
         WHERE p.{} = @0
         ORDER BY 1 DESC
         LIMIT 1;",
        orders.table_name(None),
        people.table_name(None),
        people.key_name(None),
        assert_ok!(orders.column_name(Order::fields().person_id(), None)),
        assert_ok!(people.column_name("name", None)),
    );

    let mut multi = assert_ok!(fixture.db.query_multiple(&sql, &[Value::from("Peta0")]).await);
    let result = assert_ok!(assert_ok!(multi.read_multi(|(mut order, person): (Order, Person)| {
        order.person = Some(person);
        order
    }))
    .collect_all());

    assert_eq!(result.len(), 1);

    let order = &result[0];
    assert!(order.po_number.starts_with("PO"));
    assert!(ORDER_STATUSES.contains(&order.status));
    assert_eq!(order.person_id, 1);
    assert!(order.created_on <= epoch());
    assert!(order.created_by.starts_with("Harry"));

    let person = order.person.as_ref().unwrap();
    assert_eq!(person.id, 1);
    assert!(person.name.starts_with("Peta"));
    assert_eq!(person.age, 18);
}

// ---
// Multiple result sets

#[tokio::test]
async fn multi_result_set_with_single_poco() {
    let fixture = setup().await;
    fixture.add_orders(1).await;

    let sql = "SELECT * FROM [Orders] o WHERE o.[Id] = @0;
               SELECT * FROM [People] p WHERE p.[Name] = @1;";

    let mut multi = assert_ok!(
        fixture
            .db
            .query_multiple(sql, &[Value::from("1"), Value::from("Peta0")])
            .await
    );

    let mut order = assert_ok!(assert_ok!(multi.read::<Order>()).next().unwrap());
    order.person = Some(assert_ok!(assert_ok!(multi.read::<Person>()).next().unwrap()));
    drop(multi);

    assert_eq!(order.po_number, "PO0");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.created_on, epoch());
    assert_eq!(order.created_by, "Harry0");

    let person = order.person.unwrap();
    assert_eq!(person.name, "Peta0");
    assert_eq!(person.age, 18);
}

#[tokio::test]
async fn multi_result_set_with_multi_poco() {
    let fixture = setup().await;
    fixture.add_orders(12).await;

    let sql = "SELECT * FROM [Orders] o
               INNER JOIN [People] p ON p.[Id] = o.[PersonId]
               ORDER BY o.[Id] ASC;
               SELECT * FROM [OrderLines] ol
               ORDER BY ol.[OrderId] ASC, ol.[Id] ASC;";

    let mut multi = assert_ok!(fixture.db.query_multiple(sql, &[]).await);

    let mut orders = assert_ok!(assert_ok!(multi.read_multi(|(mut order, person): (Order, Person)| {
        order.person = Some(person);
        order
    }))
    .collect_all());

    let order_lines = assert_ok!(assert_ok!(multi.read::<OrderLine>()).collect_all());

    for order in &mut orders {
        order.order_lines = order_lines
            .iter()
            .filter(|line| line.order_id == order.id)
            .cloned()
            .collect();
    }

    assert_eq!(orders.len(), 12);

    for (i, order) in orders.iter().enumerate() {
        assert_eq!(order.po_number, format!("PO{i}"));
        assert_eq!(order.status, ORDER_STATUSES[i % 4]);
        assert!(order.created_on <= epoch());

        let person = order.person.as_ref().unwrap();
        assert_eq!(person.id, order.person_id);
        assert!(person.age >= 18);

        assert_eq!(order.order_lines.len(), 2);

        let first = &order.order_lines[0];
        assert_eq!(first.quantity, 1);
        assert_eq!(first.sell_price.to_string(), "9.99");
        assert_eq!(first.status, OrderLineStatus::Pending);

        let second = &order.order_lines[1];
        assert_eq!(second.quantity, 2);
        assert_eq!(second.sell_price.to_string(), "19.98");
        assert_eq!(second.status, OrderLineStatus::Allocated);
    }

    assert!(assert_err!(multi.read::<Order>()).is_protocol_sequence());
}

#[tokio::test]
async fn statements_without_rows_do_not_produce_result_sets() {
    let fixture = setup().await;
    fixture.add_people(2, 0).await;

    let sql = "UPDATE [People] SET [Age] = [Age] + 1;
               SELECT * FROM [People] ORDER BY [Id];";

    let mut multi = assert_ok!(fixture.db.query_multiple(sql, &[]).await);
    let people = assert_ok!(assert_ok!(multi.read::<Person>()).collect_all());

    assert_eq!(
        people.iter().map(|p| p.age).collect::<Vec<_>>(),
        [19, 20]
    );
}
