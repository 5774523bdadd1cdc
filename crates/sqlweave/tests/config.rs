use sqlweave::{ContextConfig, DataType, Dialect, SelectBuilder, SqlContext, SqlError};

#[test]
fn toml_config_drives_cast_syntax() {
    let config = ContextConfig::from_toml_str(
        r#"
        dialect = "postgres"
        log_sql = false
        "#,
    )
    .unwrap();
    let ctx = SqlContext::from_config(&config);
    assert_eq!(ctx.dialect(), Dialect::Postgres);
    assert!(!ctx.log_sql());
    assert_eq!(ctx.max_sql_length(), Some(200));

    let sql = SelectBuilder::new(ctx)
        .select_and_cast("col1", &DataType::varchar_with_length(100).unwrap())
        .from_table("t")
        .build(true)
        .unwrap();
    assert_eq!(sql, "SELECT col1::VARCHAR(100) FROM t;");
}

#[test]
fn env_config_with_aliases() {
    let config = ContextConfig::from_env_map(|key| match key {
        "SQLWEAVE_DIALECT" => Some("SqlServer".to_string()),
        "SQLWEAVE_MAX_SQL_LENGTH" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    let ctx = SqlContext::from_config(&config);
    assert_eq!(ctx.dialect(), Dialect::MsSql);
    assert_eq!(ctx.max_sql_length(), None);

    let sql = SelectBuilder::new(ctx)
        .select_and_cast("col1", &DataType::integer())
        .from_table("t")
        .build(false)
        .unwrap();
    assert_eq!(sql, "SELECT CAST(col1 AS INTEGER) FROM t");
}

#[test]
fn bad_config_is_a_config_error() {
    let err = ContextConfig::from_toml_str(r#"dialect = "oracle""#).unwrap_err();
    assert!(matches!(err, SqlError::Config(_)));

    let err = ContextConfig::from_env_map(|key| {
        (key == "SQLWEAVE_LOG_SQL").then(|| "maybe".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, SqlError::Config(_)));
}
