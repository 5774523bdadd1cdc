/// Base trait for statement builders.
pub trait SqlBuilder {
    /// Error returned when the builder state cannot be rendered.
    type Error: std::error::Error;

    /// Validate builder state.
    fn validate(&self) -> Result<(), Self::Error>;

    /// Render the outermost, `;`-terminated SQL.
    fn to_sql(&self) -> Result<String, Self::Error>;
}
