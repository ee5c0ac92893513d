use poco::Value;
use pretty_assertions::assert_eq;
use tests::{models::*, *};

#[tokio::test]
async fn query_into_vec() {
    let fixture = setup().await;
    fixture.add_people(3, 0).await;

    let people: Vec<Person> = assert_ok!(
        fixture
            .db
            .query("SELECT * FROM People WHERE Age >= @0 ORDER BY Id", &[Value::I32(19)])
            .await
    );

    assert_eq!(
        people.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        ["Peta1", "Peta2"]
    );
}

#[tokio::test]
async fn aliased_columns_match_ignoring_case() {
    let fixture = setup().await;
    fixture.add_people(1, 0).await;

    let people: Vec<Person> = assert_ok!(
        fixture
            .db
            .query("SELECT Id AS ID, Name AS name, 99 AS Unmapped FROM People", &[])
            .await
    );

    assert_eq!(people[0].id, 1);
    assert_eq!(people[0].name, "Peta0");
    assert_eq!(people[0].age, 0);
}

#[tokio::test]
async fn read_only_column_in_result_set() {
    let fixture = setup().await;
    fixture.add_orders(1).await;

    let err = assert_err!(
        fixture
            .db
            .query::<OrderLine>(
                "SELECT Id, Quantity * SellPrice AS Total FROM OrderLines",
                &[],
            )
            .await
    );

    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "invalid mapping configuration: column `Total` maps to OrderLine.total, which cannot be set"
    );
}

#[tokio::test]
async fn uncoercible_column() {
    let fixture = setup().await;
    fixture.add_people(1, 0).await;

    let err = assert_err!(
        fixture
            .db
            .query::<Person>("SELECT 'tall' AS Height FROM People", &[])
            .await
    );

    assert!(err.is_coercion());
    assert_eq!(
        err.to_string(),
        "cannot coerce column `Height` of row 0 into Person.height: cannot convert String to i32"
    );
}

#[tokio::test]
async fn query_multi_joins_rows() {
    let fixture = setup().await;
    fixture.add_orders(3).await;

    let names: Vec<(String, String)> = assert_ok!(
        fixture
            .db
            .query_multi(
                "SELECT * FROM Orders o JOIN People p ON p.Id = o.PersonId ORDER BY o.Id",
                &[],
                |(order, person): (Order, Person)| (order.po_number, person.name),
            )
            .await
    );

    assert_eq!(
        names,
        [
            ("PO0".to_string(), "Peta0".to_string()),
            ("PO1".to_string(), "Peta1".to_string()),
            ("PO2".to_string(), "Peta2".to_string()),
        ]
    );
}

#[tokio::test]
async fn query_multi_with_partial_select() {
    let fixture = setup().await;
    fixture.add_orders(1).await;

    let err = assert_err!(
        fixture
            .db
            .query_multi(
                "SELECT o.*, p.Id, p.Name FROM Orders o JOIN People p ON p.Id = o.PersonId",
                &[],
                |(order, _): (Order, Person)| order,
            )
            .await
    );

    assert!(err.is_protocol_sequence());
}

#[tokio::test]
async fn execute_runs_statements() {
    let fixture = setup().await;
    fixture.add_people(1, 0).await;
    fixture.log.clear();

    assert_ok!(
        fixture
            .db
            .execute("DELETE FROM People WHERE Id = @0", &[Value::I64(1)])
            .await
    );
    assert_eq!(fixture.log.len(), 1);

    let people: Vec<Person> = assert_ok!(fixture.db.query("SELECT * FROM People", &[]).await);
    assert!(people.is_empty());
}
