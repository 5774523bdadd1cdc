use sqlweave::prelude::*;
use sqlweave::{CompositionError, StatementError, UnionKind};

fn table(ctx: SqlContext, name: &str) -> SelectBuilder {
    SelectBuilder::new(ctx).select_all().from_table(name)
}

#[test]
fn terminal_flag_holds_for_every_dialect() {
    for dialect in Dialect::ALL {
        let qb = SelectBuilder::new(SqlContext::new(dialect))
            .select("a")
            .from_table("t");
        assert!(qb.build(true).unwrap().ends_with(';'), "{dialect}");
        assert!(!qb.build(false).unwrap().ends_with(';'), "{dialect}");
    }
}

#[test]
fn cte_with_filters_casts_and_aliases() -> Result<(), CompositionError> {
    let ctx = SqlContext::new(Dialect::Postgres);
    let recent = SelectBuilder::new(ctx)
        .select("id")
        .select_and_cast_with_alias("total", "total_text", &DataType::varchar())
        .from_table("orders")
        .filter("created_at", Operator::Gte, "2024-01-01", true)
        .limit(50);

    let sql = WithBuilder::new()
        .add_table("recent", recent)?
        .add_table("archived", table(ctx, "orders_archive"))?
        .set_query(
            SelectBuilder::new(ctx)
                .select("r.id")
                .from_table_with_alias("recent", "r")
                .filter_with_alias("id", "r", Operator::NotIn, [1, 2, 3], false),
        )
        .build()?;

    assert_eq!(
        sql,
        "WITH recent AS ( SELECT id, total::VARCHAR AS total_text FROM orders \
         WHERE created_at >= '2024-01-01' LIMIT 50 ), \
         archived AS ( SELECT * FROM orders_archive ) \
         SELECT r.id FROM recent AS r WHERE r.id NOT IN (1,2,3);"
    );
    Ok(())
}

#[test]
fn cte_rejects_main_query_on_unbound_name() {
    let ctx = SqlContext::default();
    let err = WithBuilder::new()
        .add_table("one", table(ctx, "table_one"))
        .and_then(|w| w.add_table("two", table(ctx, "table_two")))
        .map(|w| w.set_query(table(ctx, "table_one")))
        .and_then(|w| w.build())
        .unwrap_err();
    assert_eq!(err, CompositionError::UnknownTable("table_one".into()));
}

#[test]
fn union_members_keep_their_own_dialect() {
    let pg = SqlContext::new(Dialect::Postgres);
    let mssql = pg.with_dialect(Dialect::MsSql);
    let int = DataType::integer();

    let sql = UnionBuilder::new(
        SelectBuilder::new(pg).select_and_cast("a", &int).from_table("t1"),
    )
    .union(SelectBuilder::new(mssql).select_and_cast("a", &int).from_table("t2"))
    .build()
    .unwrap();

    assert_eq!(
        sql,
        "SELECT a::INTEGER FROM t1 UNION SELECT CAST(a AS INTEGER) FROM t2;"
    );
}

#[test]
fn errors_convert_into_sql_error() {
    fn build_all(ctx: SqlContext) -> SqlResult<Vec<String>> {
        let select = table(ctx, "users").build(true)?;
        let union = UnionBuilder::new(table(ctx, "a")).union_all(table(ctx, "b")).build()?;
        let ddl = CreateTableBuilder::new(ctx, "users", false)?
            .add_column(TableColumn::new("name", DataType::varchar(), true)?)?
            .build()?;
        let broken = SelectBuilder::new(ctx).from_table("users").build(true)?;
        Ok(vec![select, union, ddl, broken])
    }

    let err = build_all(SqlContext::default()).unwrap_err();
    assert!(err.is_statement());
    assert_eq!(err, SqlError::Statement(StatementError::MissingColumns));
}

#[test]
fn group_policy_and_chain_interact() {
    let ctx = SqlContext::default();
    let sql = SelectBuilder::new(ctx)
        .select_all()
        .from_table("events")
        .filter_group(
            FilterGroup::new()
                .filter("kind", Operator::Eq, "click", true)
                .filter("kind", Operator::Eq, "view", true)
                .any_of(),
        )
        .filter_group(
            FilterGroup::new()
                .filter("score", Operator::Gt, 10, false)
                .filter("score", Operator::Lt, 20, false),
        )
        .or()
        .filter("pinned", Operator::Eq, true, false)
        .build(true)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM events WHERE (kind = 'click' OR kind = 'view') \
         AND (score > 10 AND score < 20) OR pinned = true;"
    );
}

#[test]
fn sql_builder_trait_in_generic_code() {
    fn terminal<B: SqlBuilder>(b: &B) -> bool {
        b.to_sql().map(|s| s.ends_with(';')).unwrap_or(false)
    }
    let ctx = SqlContext::default();
    assert!(terminal(&table(ctx, "t")));
    assert!(terminal(&UnionBuilder::new(table(ctx, "t"))));
    assert!(terminal(
        &WithBuilder::new()
            .add_table("x", table(ctx, "t"))
            .unwrap()
            .set_query(table(ctx, "x"))
    ));
    assert_eq!(UnionKind::UnionAll.as_sql(), "UNION ALL");
}
